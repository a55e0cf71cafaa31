//! Configuration errors

use super::SorterError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> SorterError {
    SorterError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SorterError {
    SorterError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SorterError {
    SorterError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
