//! File system errors

use std::path::Path;

use super::SorterError;

/// Creates a scan directory error
pub fn scan_dir_unreadable(path: &Path, reason: impl ToString) -> SorterError {
    SorterError::ScanDirUnreadable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory creation error
pub fn directory_create_failed(path: &Path, reason: impl ToString) -> SorterError {
    SorterError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file move error
pub fn move_failed(from: &Path, to: &Path, reason: impl ToString) -> SorterError {
    SorterError::MoveFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn destination_exists(path: &Path) -> SorterError {
    SorterError::DestinationExists {
        path: path.display().to_string(),
    }
}
