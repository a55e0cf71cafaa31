//! Destination resolution
//!
//! Maps a page of the current bundle to its place in the archive:
//!
//! ```text
//! {output_root}/{building}/{date}_{project}/{sheet}_{title}[-copyN].pdf
//! ```
//!
//! The resolver only derives paths from the bundle and blueprint it is
//! given; it never asks the operator anything.

use std::path::{Path, PathBuf};

use crate::common::fs::{ensure_dir, move_file};
use crate::domain::{BlueprintDescriptor, BundleAggregate};
use crate::error::{Result, fs as fs_error};

/// Extension given to every archived page
pub const ARCHIVE_EXTENSION: &str = "pdf";

/// Directory holding every page of `bundle`
pub fn bundle_directory(bundle: &BundleAggregate, output_root: &Path) -> PathBuf {
    output_root
        .join(bundle.building().slug())
        .join(bundle.directory_name())
}

/// Compute a free destination for `blueprint`, creating the bundle directory
///
/// When `{sheet}_{title}.pdf` is taken, `{sheet}_{title}-copy0.pdf`,
/// `-copy1`, ... are tried in turn and the first free one is returned.
pub fn resolve(
    bundle: &BundleAggregate,
    blueprint: &BlueprintDescriptor,
    output_root: &Path,
) -> Result<PathBuf> {
    let directory = bundle_directory(bundle, output_root);
    ensure_dir(&directory).map_err(|e| fs_error::directory_create_failed(&directory, e))?;

    let stem = blueprint.file_stem();
    let candidate = directory.join(format!("{stem}.{ARCHIVE_EXTENSION}"));
    if !candidate.exists() {
        return Ok(candidate);
    }

    let mut copy = 0u32;
    loop {
        let candidate = directory.join(format!("{stem}-copy{copy}.{ARCHIVE_EXTENSION}"));
        if !candidate.exists() {
            tracing::info!(
                destination = %candidate.display(),
                "duplicate page name, using copy suffix"
            );
            return Ok(candidate);
        }
        copy += 1;
    }
}

/// Move `scan` to a destination produced by [`resolve`]
pub fn relocate(scan: &Path, destination: &Path) -> Result<()> {
    if destination.exists() {
        return Err(fs_error::destination_exists(destination));
    }
    move_file(scan, destination).map_err(|e| fs_error::move_failed(scan, destination, e))
}
