use crate::config::{ExportFormat, Layout, Options};
use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for hoganizer.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the mustache templates.
    #[arg(short, long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Extension of template files, including the leading dot.
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// File the bundle is written to.
    #[arg(short, long, value_name = "FILE")]
    pub write_location: Option<PathBuf>,

    /// Hogan.js runtime copied into the bundle.
    #[arg(short, long, value_name = "FILE")]
    pub runtime: Option<PathBuf>,

    /// Config file to read instead of hoganizer.{json,yaml,yml}.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address templates by directory path or by file name.
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// How the bundle exposes the template namespace.
    #[arg(long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Name of the browser global for the `window` export.
    #[arg(long, value_name = "NAME")]
    pub global_name: Option<String>,

    /// Glob patterns, relative to the template directory, to skip (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Print the bundle to stdout instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// List discovered templates and exit.
    #[arg(long)]
    pub list: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Options set on the command line; unset flags stay `None`.
    pub fn options(&self) -> Options {
        Options {
            template_dir: self.template_dir.clone(),
            extension: self.extension.clone(),
            write_location: self.write_location.clone(),
            runtime: self.runtime.clone(),
            layout: self.layout,
            export: self.export,
            global_name: self.global_name.clone(),
            header: None,
            ignore: self.ignore.clone(),
        }
    }
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_no_args() {
        let args = Args::parse_from(["hoganizer"]);
        assert!(args.template_dir.is_none());
        assert!(!args.dry_run);
        assert_eq!(args.verbose, 0);
        let options = args.options();
        assert!(options.extension.is_none());
        assert!(options.ignore.is_empty());
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "hoganizer",
            "--template-dir",
            "views",
            "--extension",
            ".hbs",
            "--write-location",
            "public/templates.js",
            "--runtime",
            "vendor/template.js",
            "--layout",
            "flat",
            "--export",
            "commonjs",
            "--ignore",
            "drafts/**,**/_*",
            "--dry-run",
            "-vv",
        ]);
        assert_eq!(args.template_dir, Some(PathBuf::from("views")));
        assert_eq!(args.extension, Some(".hbs".to_string()));
        assert_eq!(args.write_location, Some(PathBuf::from("public/templates.js")));
        assert_eq!(args.runtime, Some(PathBuf::from("vendor/template.js")));
        assert_eq!(args.layout, Some(Layout::Flat));
        assert_eq!(args.export, Some(ExportFormat::CommonJs));
        assert_eq!(args.ignore, vec!["drafts/**".to_string(), "**/_*".to_string()]);
        assert!(args.dry_run);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(Args::try_parse_from(["hoganizer", "--layout", "tree"]).is_err());
    }
}
