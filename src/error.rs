use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON config file. Original error: {0}")]
    ConfigJsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config file. Original error: {0}")]
    ConfigYamlParseError(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    #[error("Config file '{config_file}' does not exist.")]
    ConfigNotFound { config_file: String },

    #[error("Failed to parse ignore patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to render the bundle header. Original error: {0}")]
    HeaderRenderError(#[from] minijinja::Error),

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDirNotFound { template_dir: String },

    #[error("Failed to walk the template directory. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Cannot read '{path}'. Original error: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write '{path}'. Original error: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The compiler rejected the source of a template.
    #[error("Failed to compile template '{template}': {reason}.")]
    CompileError { template: String, reason: String },

    /// A discovered file could not be mapped to a namespace path.
    #[error("Cannot derive a namespace path for '{path}': {reason}.")]
    InvalidTemplatePath { path: String, reason: String },

    /// A registration targeted a namespace that was never declared.
    #[error("Namespace '{path}' is used before it is declared.")]
    UndeclaredNamespace { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
