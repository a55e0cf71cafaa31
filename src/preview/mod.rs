//! Scan preview
//!
//! While the operator types metadata for a scan, the scan is shown in an
//! external PDF viewer. The viewer process is owned by a [`PreviewGuard`];
//! dropping the guard kills and reaps the viewer, so it never outlives the
//! scan it was opened for, whichever way prompting ends.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

#[derive(Debug)]
pub struct PreviewGuard {
    child: Option<Child>,
    scan: PathBuf,
}

impl PreviewGuard {
    /// Launch `viewer` on `scan`
    ///
    /// With no viewer configured, or if the viewer cannot be started, the
    /// guard is inert: sorting does not depend on the preview.
    pub fn open(viewer: Option<&Path>, scan: &Path) -> Self {
        let child = viewer.and_then(|viewer| {
            match Command::new(viewer)
                .arg(scan)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => {
                    tracing::debug!(pid = child.id(), scan = %scan.display(), "opened preview");
                    Some(child)
                }
                Err(e) => {
                    tracing::warn!(
                        viewer = %viewer.display(),
                        error = %e,
                        "could not launch preview viewer"
                    );
                    None
                }
            }
        });

        Self {
            child,
            scan: scan.to_path_buf(),
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.child.is_some()
    }

    /// Close the viewer now, returning its exit status if one was running
    pub fn close(mut self) -> Option<ExitStatus> {
        self.terminate()
    }

    fn terminate(&mut self) -> Option<ExitStatus> {
        let mut child = self.child.take()?;
        // The viewer may already have been closed by the operator
        if let Err(e) = child.kill() {
            tracing::debug!(error = %e, "preview already exited");
        }
        match child.wait() {
            Ok(status) => {
                tracing::debug!(scan = %self.scan.display(), %status, "closed preview");
                Some(status)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to reap preview viewer");
                None
            }
        }
    }
}

impl Drop for PreviewGuard {
    fn drop(&mut self) {
        self.terminate();
    }
}
