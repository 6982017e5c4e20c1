//! Core application functionality
//!
//! This module contains the command-line surface of slcgen:
//! - Argument parsing and the settings file
//! - Error types shared by every layer
//! - The runner that ties metrics, catalog and output together

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use errors::{SlcError, SlcResult};
pub use runner::run_app;
