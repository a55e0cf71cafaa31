//! Bundle log errors

use std::path::Path;

use super::SorterError;

/// Creates a log write error
pub fn write_failed(path: &Path, reason: impl ToString) -> SorterError {
    SorterError::LogWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a log read error
pub fn read_failed(path: &Path, reason: impl ToString) -> SorterError {
    SorterError::LogReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a log parse error
pub fn parse_failed(path: &Path, reason: impl ToString) -> SorterError {
    SorterError::LogParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a backup error
pub fn backup_failed(from: &Path, to: &Path, reason: impl ToString) -> SorterError {
    SorterError::BackupFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}
