/// Handles argument parsing and the command line workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Configuration loading, defaults and validation.
pub mod config;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Processes ignore patterns to exclude template paths.
pub mod ignore;

/// Recognises template files by extension.
pub mod classifier;

/// Discovers templates on disk and derives their identifiers.
pub mod loader;

/// Builds the namespace tree from dotted template paths.
pub mod namespace;

/// Mustache to Hogan.js compilation.
pub mod compiler;

/// Bundle text generation.
pub mod bundle;

/// The precompile, cache and write facade.
pub mod hoganizer;

pub use config::{Config, Options};
pub use hoganizer::Hoganizer;
