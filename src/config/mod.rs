//! Configuration management for hoganizer
//!
//! - `types`: enums selecting the bundle layout and export format
//! - `loader`: option files, defaulting, validation and path resolution

pub mod loader;
pub mod types;


pub use loader::{Config, Options};
pub use types::{ExportFormat, Layout};
