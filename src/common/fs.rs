//! Common file system operations with unified error handling

use std::fs;
use std::io;
use std::path::Path;

/// Create a directory and its parents, succeeding if it already exists
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Move a file, refusing to replace an existing destination
///
/// Tries a rename first and falls back to copy-then-remove when the rename
/// fails (e.g. the archive lives on another filesystem). If the copy
/// succeeded but the source could not be removed, both files exist and the
/// error is returned so the operator can clean up.
pub fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if to.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if !from.is_file() {
                return Err(rename_err);
            }
            if let Err(copy_err) = fs::copy(from, to) {
                let _ = fs::remove_file(to);
                return Err(copy_err);
            }
            fs::remove_file(from).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!(
                        "copied to {} but could not remove source: {e}",
                        to.display()
                    ),
                )
            })
        }
    }
}
