//! Configuration loading and management

use crate::bundle::identifier::is_identifier;
use crate::config::types::{ExportFormat, Layout};
use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_EXTENSION, DEFAULT_GLOBAL_NAME, DEFAULT_RUNTIME,
    DEFAULT_TEMPLATE_DIR, DEFAULT_WRITE_LOCATION,
};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User supplied options. Every field is optional; unset fields fall back to defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    pub template_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub write_location: Option<PathBuf>,
    pub runtime: Option<PathBuf>,
    pub layout: Option<Layout>,
    pub export: Option<ExportFormat>,
    pub global_name: Option<String>,
    pub header: Option<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Options {
    /// Layers `overrides` on top of `self`. Set fields of `overrides` win; ignore lists are concatenated.
    pub fn merge(self, overrides: Options) -> Options {
        let mut ignore = self.ignore;
        ignore.extend(overrides.ignore);
        Options {
            template_dir: overrides.template_dir.or(self.template_dir),
            extension: overrides.extension.or(self.extension),
            write_location: overrides.write_location.or(self.write_location),
            runtime: overrides.runtime.or(self.runtime),
            layout: overrides.layout.or(self.layout),
            export: overrides.export.or(self.export),
            global_name: overrides.global_name.or(self.global_name),
            header: overrides.header.or(self.header),
            ignore,
        }
    }

    /// Loads options from `config_file`, or from the first default config file found in `cwd`.
    ///
    /// No config file at the default locations yields empty options. An explicit
    /// file that does not exist is an error.
    pub fn load<P: AsRef<Path>>(cwd: P, config_file: Option<&Path>) -> Result<Self> {
        let cwd = cwd.as_ref();

        if let Some(config_file) = config_file {
            let config_file = config_file.absolutize(cwd);
            if !config_file.exists() {
                return Err(Error::ConfigNotFound {
                    config_file: config_file.display().to_string(),
                });
            }
            return Self::from_file(&config_file);
        }

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = cwd.join(config_file_name);
            if config_file_path.exists() {
                return Self::from_file(&config_file_path);
            }
        }

        debug!("No config file found in '{}', using defaults.", cwd.display());
        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from '{}'", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        let options: Options = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(options)
    }
}

/// Resolved configuration. Paths are absolute; the value is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub template_dir: PathBuf,
    pub extension: String,
    pub write_location: PathBuf,
    pub runtime: PathBuf,
    pub layout: Layout,
    pub export: ExportFormat,
    pub global_name: String,
    pub header: Option<String>,
    pub ignore: Vec<String>,
}

impl Config {
    /// Builds a configuration from options, resolving relative paths against `cwd`.
    pub fn from_options<P: AsRef<Path>>(options: Options, cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();
        let resolve = |path: Option<PathBuf>, default: &str| {
            path.unwrap_or_else(|| PathBuf::from(default)).absolutize(cwd)
        };

        let config = Config {
            template_dir: resolve(options.template_dir, DEFAULT_TEMPLATE_DIR),
            extension: options.extension.unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            write_location: resolve(options.write_location, DEFAULT_WRITE_LOCATION),
            runtime: resolve(options.runtime, DEFAULT_RUNTIME),
            layout: options.layout.unwrap_or_default(),
            export: options.export.unwrap_or_default(),
            global_name: options
                .global_name
                .unwrap_or_else(|| DEFAULT_GLOBAL_NAME.to_string()),
            header: options.header,
            ignore: options.ignore,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(Error::ConfigValidation(
                "extension must start with '.' and have at least 1 character after it"
                    .into(),
            ));
        }
        if self.extension[1..].contains('.') {
            return Err(Error::ConfigValidation(format!(
                "extension '{}' must not contain more than one '.'",
                self.extension
            )));
        }
        if !is_identifier(&self.global_name) {
            return Err(Error::ConfigValidation(format!(
                "globalName '{}' is not a valid JavaScript identifier",
                self.global_name
            )));
        }
        Ok(())
    }
}
