//! Sorting session state machine
//!
//! A session feeds scans, oldest first, through [`SessionState`]:
//!
//! ```text
//! AwaitingFirstScan --scan--> AccumulatingBundle --scan--> AwaitingBundleDecision
//!                                     ^                          |
//!                                     +------ same / new --------+
//! ```
//!
//! The current bundle lives inside the state value and is handed from one
//! transition to the next. Once the scans run out, [`Session::finish`]
//! consumes the last state and produces the [`SessionSummary`]; there is no
//! way to feed a finished session another scan.
//!
//! Every bundle is finalized and written to the [`BundleLog`] exactly once:
//! when the operator starts a new project, when the batch ends, or when a
//! fatal error stops the run after some of its pages were already moved.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::bundle_log::BundleLog;
use crate::domain::{BlueprintDescriptor, BundleAggregate, BundleRecord};
use crate::error::{Result, SorterError};
use crate::operator::Operator;
use crate::preview::PreviewGuard;
use crate::resolver;

/// Where the session stands between two scans
#[derive(Debug)]
pub enum SessionState {
    /// No bundle yet; the next scan starts one without asking
    AwaitingFirstScan,
    /// Pages are being added to this bundle
    AccumulatingBundle(BundleAggregate),
    /// The operator is being asked whether the scan belongs to this bundle
    AwaitingBundleDecision(BundleAggregate),
}

impl SessionState {
    pub fn current_bundle(&self) -> Option<&BundleAggregate> {
        match self {
            SessionState::AwaitingFirstScan => None,
            SessionState::AccumulatingBundle(b) | SessionState::AwaitingBundleDecision(b) => {
                Some(b)
            }
        }
    }

    fn into_bundle(self) -> Option<BundleAggregate> {
        match self {
            SessionState::AwaitingFirstScan => None,
            SessionState::AccumulatingBundle(b) | SessionState::AwaitingBundleDecision(b) => {
                Some(b)
            }
        }
    }
}

/// A transition that could not complete
///
/// Carries the state to fall back to so the pages already filed under the
/// current bundle can still be logged.
#[derive(Debug)]
pub struct Halted {
    pub state: SessionState,
    pub error: SorterError,
}

/// What a finished session did
#[derive(Debug, Default)]
pub struct SessionSummary {
    /// Archive paths of every relocated scan, in processing order
    pub relocated: Vec<PathBuf>,
    /// Records written to the bundle log, in order
    pub bundles: Vec<BundleRecord>,
}

impl SessionSummary {
    pub fn scans_processed(&self) -> usize {
        self.relocated.len()
    }
}

/// Drives one batch of scans
pub struct Session<'a> {
    operator: &'a mut dyn Operator,
    log: &'a BundleLog,
    output_root: &'a Path,
    viewer: Option<&'a Path>,
    summary: SessionSummary,
}

impl<'a> Session<'a> {
    pub fn new(
        operator: &'a mut dyn Operator,
        log: &'a BundleLog,
        output_root: &'a Path,
        viewer: Option<&'a Path>,
    ) -> Self {
        Self {
            operator,
            log,
            output_root,
            viewer,
            summary: SessionSummary::default(),
        }
    }

    /// Back up the log, sort every scan and log the last bundle
    ///
    /// An empty batch touches neither the log nor its backup.
    pub fn run(mut self, scans: &[PathBuf]) -> Result<SessionSummary> {
        if scans.is_empty() {
            tracing::info!("no scans to sort");
            return Ok(self.summary);
        }
        self.log.startup()?;

        let mut state = SessionState::AwaitingFirstScan;
        for scan in scans {
            state = match self.step(state, scan) {
                Ok(next) => next,
                Err(Halted { state, error }) => {
                    self.abandon(state);
                    return Err(error);
                }
            };
        }
        self.finish(state)
    }

    /// Feed one scan to the state machine
    pub fn step(
        &mut self,
        state: SessionState,
        scan: &Path,
    ) -> std::result::Result<SessionState, Halted> {
        let name = scan.file_name().map_or_else(
            || scan.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        self.operator
            .notify(&format!("Processing next file in line, filename {name}"));
        tracing::debug!(
            scan = %scan.display(),
            bundle = ?state.current_bundle().map(BundleAggregate::id),
            "next scan"
        );

        let preview = PreviewGuard::open(self.viewer, scan);

        let bundle = match state {
            SessionState::AwaitingFirstScan => self.start_bundle()?,
            SessionState::AccumulatingBundle(bundle)
            | SessionState::AwaitingBundleDecision(bundle) => self.decide(bundle)?,
        };
        let bundle = self.file_page(bundle, scan)?;

        preview.close();
        Ok(SessionState::AccumulatingBundle(bundle))
    }

    /// Log the bundle still in progress and report what was done
    pub fn finish(mut self, state: SessionState) -> Result<SessionSummary> {
        if let Some(bundle) = state.into_bundle() {
            self.finalize(bundle)?;
        }
        tracing::info!(
            scans = self.summary.scans_processed(),
            bundles = self.summary.bundles.len(),
            "session finished"
        );
        Ok(self.summary)
    }

    fn start_bundle(&mut self) -> std::result::Result<BundleAggregate, Halted> {
        let bundle = BundleAggregate::capture(&mut *self.operator).map_err(|error| Halted {
            state: SessionState::AwaitingFirstScan,
            error,
        })?;
        tracing::info!(
            uuid = %bundle.id(),
            project = bundle.project_name(),
            building = %bundle.building(),
            date = %bundle.date(),
            "started bundle"
        );
        Ok(bundle)
    }

    /// Ask whether the scan continues `bundle`; otherwise log it and start anew
    fn decide(&mut self, bundle: BundleAggregate) -> std::result::Result<BundleAggregate, Halted> {
        let prompt = format!(
            "Is this blueprint included in the project {}?",
            bundle.project_name()
        );
        match self.operator.confirm(&prompt) {
            Ok(true) => Ok(bundle),
            Ok(false) => {
                self.finalize(bundle).map_err(|error| Halted {
                    state: SessionState::AwaitingFirstScan,
                    error,
                })?;
                self.start_bundle()
            }
            Err(error) => Err(Halted {
                state: SessionState::AwaitingBundleDecision(bundle),
                error,
            }),
        }
    }

    /// Capture the page metadata, move the scan into the archive and add the page
    ///
    /// The page is only added once the file is in place, so the bundle's
    /// contents always match what is on disk.
    fn file_page(
        &mut self,
        mut bundle: BundleAggregate,
        scan: &Path,
    ) -> std::result::Result<BundleAggregate, Halted> {
        let placed = BlueprintDescriptor::capture(&mut *self.operator).and_then(|blueprint| {
            let destination = resolver::resolve(&bundle, &blueprint, self.output_root)?;
            resolver::relocate(scan, &destination)?;
            Ok((blueprint, destination))
        });
        let (blueprint, destination) = match placed {
            Ok(placed) => placed,
            Err(error) => {
                return Err(Halted {
                    state: SessionState::AccumulatingBundle(bundle),
                    error,
                });
            }
        };

        if destination.file_stem() != Some(OsStr::new(&blueprint.file_stem())) {
            let name = destination
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.operator
                .notify(&format!("Duplicate file detected, saved as {name}"));
        }

        let page = bundle.append(&blueprint);
        tracing::info!(
            scan = %scan.display(),
            destination = %destination.display(),
            page,
            "relocated scan"
        );
        self.summary.relocated.push(destination);

        self.operator.notify(&format!(
            "Page count for the project {} is now {page}",
            bundle.project_name()
        ));
        let contents = bundle
            .contents()
            .iter()
            .map(|(page, title)| format!("{page}: {title}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.operator
            .notify(&format!("Pages associated with this bundle: {{{contents}}}"));

        Ok(bundle)
    }

    fn finalize(&mut self, bundle: BundleAggregate) -> Result<()> {
        let finalized = bundle.finalize();
        let record = self.log.record(&finalized)?;
        tracing::info!(
            uuid = %finalized.bundle().id(),
            pages = finalized.bundle().page_count(),
            "finalized bundle"
        );
        self.operator.notify(&finalized.to_string());
        self.summary.bundles.push(record);
        Ok(())
    }

    /// Log a bundle interrupted by a fatal error if any of its pages were moved
    fn abandon(&mut self, state: SessionState) {
        let Some(bundle) = state.into_bundle() else {
            return;
        };
        if bundle.page_count() == 0 {
            return;
        }
        if let Err(e) = self.finalize(bundle) {
            tracing::error!(error = %e, "could not log interrupted bundle");
            self.operator
                .warn(&format!("The interrupted bundle could not be logged: {e}"));
        }
    }
}
