//! Basic types and enums for configuration

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;

/// How templates are addressed inside the bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Layout {
    /// Nested namespaces mirroring the directory layout (`widgets.card`).
    #[default]
    Nested,
    /// One level keyed by file name (`card`). Duplicate names overwrite each other.
    Flat,
}

/// How the namespace object leaves the bundle closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Assign to a browser global: `window.templates = templates;`
    #[default]
    Window,
    /// Assign to `module.exports`.
    CommonJs,
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Layout::Nested => "nested",
            Layout::Flat => "flat",
        };
        write!(f, "{s}")
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExportFormat::Window => "window",
            ExportFormat::CommonJs => "commonjs",
        };
        write!(f, "{s}")
    }
}
