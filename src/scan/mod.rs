//! Scan discovery
//!
//! Scans are the `*.PDF` files (upper-case extension, as written by the
//! scanner) directly inside the input directory, visited oldest first.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, fs as fs_error};

/// File name pattern the scanner produces
pub const SCAN_PATTERN: &str = "*.PDF";

/// List scans in ascending modification time, ties broken by file name
pub fn discover_scans(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(fs_error::scan_dir_unreadable(
            input_dir,
            "not a directory or does not exist",
        ));
    }

    let glob = Glob::new(SCAN_PATTERN).map_err(|e| fs_error::scan_dir_unreadable(input_dir, e))?;

    let mut scans: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| fs_error::scan_dir_unreadable(input_dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if glob.matched(&CandidatePath::from(name)).is_none() {
            tracing::debug!(file = name, "ignoring file that is not a scan");
            continue;
        }
        let modified = entry
            .metadata()
            .map_err(|e| fs_error::scan_dir_unreadable(input_dir, e))?
            .modified()
            .map_err(|e| fs_error::scan_dir_unreadable(input_dir, e))?;
        scans.push((modified, entry.into_path()));
    }

    scans.sort();
    tracing::info!(count = scans.len(), dir = %input_dir.display(), "discovered scans");
    Ok(scans.into_iter().map(|(_, path)| path).collect())
}
