//! Error types and handling for the blueprint sorter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration file errors
//! - [`fs`]: Scan discovery, directory creation and file relocation errors
//! - [`log`]: Bundle log and backup errors
//! - [`prompt`]: Operator interaction errors

pub mod config;
pub mod fs;
pub mod log;
pub mod prompt;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sorting sessions
#[derive(Error, Diagnostic, Debug)]
pub enum SorterError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(blueprint_sorter::config::not_found),
        help("Create the file or run 'blueprint-sorter config' to see the effective settings")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(blueprint_sorter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(blueprint_sorter::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Scan and archive errors
    #[error("Cannot read scan directory: {path}: {reason}")]
    #[diagnostic(
        code(blueprint_sorter::fs::scan_dir_unreadable),
        help("Check 'input_dir' in the configuration or pass --input")
    )]
    ScanDirUnreadable { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(blueprint_sorter::fs::directory_create_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to move {from} to {to}: {reason}")]
    #[diagnostic(
        code(blueprint_sorter::fs::move_failed),
        help("Files sorted before this one are already in place; check both paths before re-running")
    )]
    MoveFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Refusing to overwrite existing file: {path}")]
    #[diagnostic(code(blueprint_sorter::fs::destination_exists))]
    DestinationExists { path: String },

    // Bundle log errors
    #[error("Failed to write bundle log: {path}: {reason}")]
    #[diagnostic(code(blueprint_sorter::log::write_failed))]
    LogWriteFailed { path: String, reason: String },

    #[error("Failed to read bundle log: {path}: {reason}")]
    #[diagnostic(code(blueprint_sorter::log::read_failed))]
    LogReadFailed { path: String, reason: String },

    #[error("Bundle log is malformed: {path}: {reason}")]
    #[diagnostic(code(blueprint_sorter::log::parse_failed))]
    LogParseFailed { path: String, reason: String },

    #[error("Failed to back up bundle log {from} to {to}: {reason}")]
    #[diagnostic(code(blueprint_sorter::log::backup_failed))]
    BackupFailed {
        from: String,
        to: String,
        reason: String,
    },

    // Operator interaction errors
    #[error("Failed to read operator input: {message}")]
    #[diagnostic(code(blueprint_sorter::prompt::failed))]
    PromptFailed { message: String },

    #[error("Sorting cancelled by operator")]
    #[diagnostic(
        code(blueprint_sorter::prompt::cancelled),
        help("The scan on screen was left in the input directory and will be offered again next run")
    )]
    PromptCancelled,

    #[error("IO error: {message}")]
    #[diagnostic(code(blueprint_sorter::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SorterError {
    fn from(err: std::io::Error) -> Self {
        SorterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SorterError {
    fn from(err: serde_yaml::Error) -> Self {
        SorterError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SorterError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => SorterError::PromptCancelled,
            other => prompt::failed(other.to_string()),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SorterError>;
