//! Common test utilities for blueprint sorter integration tests

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch scanning station: input, output, logs and an isolated home
pub struct TestStation {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Root of the station
    pub path: PathBuf,
}

impl TestStation {
    /// Create a new station with an empty input directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("input")).expect("Failed to create input directory");
        Self { temp, path }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.path.join("input")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path.join("output")
    }

    pub fn log_file(&self) -> PathBuf {
        self.path.join("log.json")
    }

    pub fn backup_log_file(&self) -> PathBuf {
        self.path.join("backup-log.json")
    }

    /// Drop a scan into the input directory, `age` old
    #[allow(dead_code)]
    pub fn add_scan(&self, name: &str, age: Duration) -> PathBuf {
        let path = self.input_dir().join(name);
        std::fs::write(&path, b"%PDF-1.4\n").expect("Failed to write scan");
        std::fs::File::options()
            .write(true)
            .open(&path)
            .and_then(|f| f.set_modified(SystemTime::now() - age))
            .expect("Failed to set scan mtime");
        path
    }

    /// Write a file relative to the station root
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// The real binary, pointed at this station and isolated from the user's config
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("blueprint-sorter").expect("binary should build");
        cmd.env("HOME", &self.path)
            .env("XDG_CONFIG_HOME", self.path.join(".config"))
            .env_remove("BLUEPRINT_SORTER_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--input")
            .arg(self.input_dir())
            .arg("--output")
            .arg(self.output_dir())
            .arg("--log-file")
            .arg(self.log_file())
            .arg("--backup-log-file")
            .arg(self.backup_log_file())
            .arg("--no-preview");
        cmd
    }
}

impl Default for TestStation {
    fn default() -> Self {
        Self::new()
    }
}

/// The binary with no station flags, isolated from the user's config
#[allow(dead_code)]
pub fn bare_cmd(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("blueprint-sorter").expect("binary should build");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("BLUEPRINT_SORTER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Two bundles in the layout older releases wrote: indented objects back to back
#[allow(dead_code)]
pub const LEGACY_LOG: &str = r#"{
    "UUID": "6f1c1f3e-5a7e-4d0b-9a55-1d2f6f9c2b10",
    "Date": "2019-05-01",
    "Building": "Primary-School",
    "Pages": 2,
    "Contents": {
        "1": "Cover-Sheet",
        "2": "Detail"
    }
}{
    "UUID": "0b7a3c55-2f0e-4c1f-8d0e-7e3c9f1a4d22",
    "Date": "1987-11-30",
    "Building": "Water-Treatment-Facility",
    "Pages": 1,
    "Contents": {
        "1": "Piping"
    }
}"#;
