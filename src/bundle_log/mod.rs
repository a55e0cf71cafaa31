//! Bundle log
//!
//! Finalized bundles are appended to a log file that is never rewritten. On
//! startup the previous log is copied to a backup path before any new record
//! is written.
//!
//! Two on-disk formats are supported:
//! - [`LogFormat::Jsonl`] (default): one compact JSON object per line
//! - [`LogFormat::Pretty`]: 4-space indented objects written back to back,
//!   the layout of logs produced by earlier versions of the tool
//!
//! [`read_records`] accepts both, including files that mix them.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{BundleRecord, FinalizedBundle};
use crate::error::{Result, log as log_error};

/// Layout of records in the log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Jsonl,
    /// Indented JSON objects
    Pretty,
}

/// What [`BundleLog::startup`] did with the previous log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    Copied { bytes: u64 },
    NoPrimaryLog,
}

/// Append-only writer for finalized bundles
#[derive(Debug, Clone)]
pub struct BundleLog {
    primary: PathBuf,
    backup: PathBuf,
    format: LogFormat,
}

impl BundleLog {
    pub fn new(primary: impl Into<PathBuf>, backup: impl Into<PathBuf>, format: LogFormat) -> Self {
        Self {
            primary: primary.into(),
            backup: backup.into(),
            format,
        }
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// Copy the existing log to the backup path
    ///
    /// A missing log is the normal first-run case and is not an error.
    pub fn startup(&self) -> Result<BackupOutcome> {
        if !self.primary.exists() {
            tracing::info!(
                log = %self.primary.display(),
                "no log file found, a new one will be created"
            );
            return Ok(BackupOutcome::NoPrimaryLog);
        }

        if let Some(parent) = self.backup.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| log_error::backup_failed(&self.primary, &self.backup, e))?;
        }
        let bytes = fs::copy(&self.primary, &self.backup)
            .map_err(|e| log_error::backup_failed(&self.primary, &self.backup, e))?;

        tracing::info!(
            from = %self.primary.display(),
            to = %self.backup.display(),
            bytes,
            "backed up bundle log"
        );
        Ok(BackupOutcome::Copied { bytes })
    }

    /// Append the record of a finalized bundle
    pub fn record(&self, bundle: &FinalizedBundle) -> Result<BundleRecord> {
        let record = bundle.to_log_record();
        self.append(&record)?;
        tracing::info!(
            uuid = %record.uuid,
            pages = record.pages,
            building = %record.building,
            "logged bundle"
        );
        Ok(record)
    }

    pub fn append(&self, record: &BundleRecord) -> Result<()> {
        let mut bytes = match self.format {
            LogFormat::Jsonl => serde_json::to_vec(record),
            LogFormat::Pretty => {
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(Vec::new(), formatter);
                record.serialize(&mut ser).map(|()| ser.into_inner())
            }
        }
        .map_err(|e| log_error::write_failed(&self.primary, e))?;
        bytes.push(b'\n');

        if let Some(parent) = self.primary.parent() {
            fs::create_dir_all(parent).map_err(|e| log_error::write_failed(&self.primary, e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.primary)
            .map_err(|e| log_error::write_failed(&self.primary, e))?;
        file.write_all(&bytes)
            .and_then(|()| file.sync_data())
            .map_err(|e| log_error::write_failed(&self.primary, e))
    }
}

/// Read every record in a log file, oldest first
///
/// A log that does not exist yet holds no records.
pub fn read_records(path: &Path) -> Result<Vec<BundleRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(|e| log_error::read_failed(path, e))?;
    serde_json::Deserializer::from_str(&content)
        .into_iter::<BundleRecord>()
        .map(|r| r.map_err(|e| log_error::parse_failed(path, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlueprintDescriptor, Building, BundleAggregate, BundleDate};
    use tempfile::TempDir;

    fn finalized(project: &str, titles: &[&str]) -> FinalizedBundle {
        let mut bundle = BundleAggregate::new(
            project,
            Building::HighSchool,
            BundleDate::new(1999, 6, 15).unwrap(),
        );
        for title in titles {
            bundle.append(&BlueprintDescriptor::new(title, "1"));
        }
        bundle.finalize()
    }

    #[test]
    fn test_startup_without_log_is_tolerated() {
        let temp = TempDir::new().unwrap();
        let log = BundleLog::new(
            temp.path().join("log.json"),
            temp.path().join("backup-log.json"),
            LogFormat::Jsonl,
        );
        assert_eq!(log.startup().unwrap(), BackupOutcome::NoPrimaryLog);
        assert!(!temp.path().join("backup-log.json").exists());
    }

    #[test]
    fn test_startup_copies_log_verbatim() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("log.json");
        let backup = temp.path().join("old").join("backup-log.json");
        let previous = "{\"anything\": 1}{\"at\": \"all\"}";
        fs::write(&primary, previous).unwrap();

        let log = BundleLog::new(&primary, &backup, LogFormat::Jsonl);
        assert_eq!(
            log.startup().unwrap(),
            BackupOutcome::Copied {
                bytes: previous.len() as u64
            }
        );
        assert_eq!(fs::read_to_string(&backup).unwrap(), previous);
    }

    #[test]
    fn test_jsonl_writes_one_line_per_bundle() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("log.json");
        let log = BundleLog::new(&primary, temp.path().join("b.json"), LogFormat::Jsonl);

        log.record(&finalized("Gym", &["Cover", "Plan"])).unwrap();
        log.record(&finalized("Pool", &[])).unwrap();

        let content = fs::read_to_string(&primary).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["Pages"], 2);
        assert_eq!(first["Contents"]["2"], "Plan");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["Pages"], 0);
    }

    #[test]
    fn test_pretty_format_is_indented() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("log.json");
        let log = BundleLog::new(&primary, temp.path().join("b.json"), LogFormat::Pretty);

        log.record(&finalized("Gym", &["Cover"])).unwrap();

        let content = fs::read_to_string(&primary).unwrap();
        assert!(content.starts_with("{\n    \"UUID\": "));
        assert!(content.contains("    \"Building\": \"High-School\""));
    }

    #[test]
    fn test_read_records_accepts_both_formats() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("log.json");
        let backup = temp.path().join("b.json");

        let a = finalized("Gym", &["Cover"]);
        let b = finalized("Pool", &["Cover", "Detail", "Detail"]);
        BundleLog::new(&primary, &backup, LogFormat::Pretty)
            .record(&a)
            .unwrap();
        BundleLog::new(&primary, &backup, LogFormat::Jsonl)
            .record(&b)
            .unwrap();

        let records = read_records(&primary).unwrap();
        assert_eq!(records, vec![a.to_log_record(), b.to_log_record()]);
    }

    #[test]
    fn test_read_records_handles_concatenated_objects() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("log.json");
        let legacy = concat!(
            "{\n    \"UUID\": \"6f1c1f3e-5a7e-4d0b-9a55-1d2f6f9c2b10\",\n",
            "    \"Date\": \"2019-05-01\",\n    \"Building\": \"Primary-School\",\n",
            "    \"Pages\": 1,\n    \"Contents\": {\n        \"1\": \"Cover-Sheet\"\n    }\n}",
            "{\n    \"UUID\": \"0b7a3c55-2f0e-4c1f-8d0e-7e3c9f1a4d22\",\n",
            "    \"Date\": \"2018-01-09\",\n    \"Building\": \"Other\",\n",
            "    \"Pages\": 0,\n    \"Contents\": {}\n}"
        );
        fs::write(&primary, legacy).unwrap();

        let records = read_records(&primary).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].building, Building::PrimarySchool);
        assert_eq!(records[0].contents[&1], "Cover-Sheet");
        assert_eq!(records[1].pages, 0);
    }

    #[test]
    fn test_read_records_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(read_records(&temp.path().join("none.json")).unwrap().is_empty());
    }

    #[test]
    fn test_read_records_reports_garbage() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("log.json");
        fs::write(&primary, "not json").unwrap();
        assert!(matches!(
            read_records(&primary).unwrap_err(),
            crate::error::SorterError::LogParseFailed { .. }
        ));
    }
}
