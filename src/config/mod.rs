//! Sorter configuration (config.yaml)
//!
//! Settings come from three layers, later ones winning:
//! 1. built-in defaults rooted at `~/Documents/Blueprint-Scanning`
//! 2. the YAML configuration file
//! 3. command line flags
//!
//! ```yaml
//! input_dir: /home/scanner/Blueprint-Scanning/Input-Scans
//! output_dir: /home/scanner/Blueprint-Scanning/Output-Scans
//! viewer: /usr/bin/mupdf
//! log_file: /home/scanner/Blueprint-Scanning/log.json
//! backup_log_file: /home/scanner/Blueprint-Scanning/backup-log.json
//! log_format: jsonl
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundle_log::{BundleLog, LogFormat};
use crate::cli::ConfigArgs;
use crate::error::{Result, SorterError, config as config_error};

/// Name of the directory under the user config directory
const CONFIG_DIR_NAME: &str = "blueprint-sorter";
const CONFIG_FILE_NAME: &str = "config.yaml";
const DEFAULT_VIEWER: &str = "/usr/bin/mupdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SorterConfig {
    /// Directory the scanner writes to
    pub input_dir: PathBuf,
    /// Root of the sorted archive
    pub output_dir: PathBuf,
    /// Preview program; no preview when unset
    pub viewer: Option<PathBuf>,
    pub log_file: PathBuf,
    pub backup_log_file: PathBuf,
    pub log_format: LogFormat,
}

impl Default for SorterConfig {
    fn default() -> Self {
        let base = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Documents")
            .join("Blueprint-Scanning");
        Self {
            input_dir: base.join("Input-Scans"),
            output_dir: base.join("Output-Scans"),
            viewer: Some(PathBuf::from(DEFAULT_VIEWER)),
            log_file: base.join("log.json"),
            backup_log_file: base.join("backup-log.json"),
            log_format: LogFormat::default(),
        }
    }
}

impl SorterConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load the configuration file, or defaults when there is none
    ///
    /// An explicitly requested file must exist; the default location is
    /// optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(config_error::not_found(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let yaml = fs::read_to_string(&path)
            .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;
        let config = Self::from_yaml(&yaml).map_err(|e| match e {
            SorterError::ConfigParseFailed { reason, .. } => {
                config_error::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load and apply command line overrides
    pub fn resolve(args: &ConfigArgs) -> Result<Self> {
        let mut config = Self::load(args.config.as_deref())?;
        config.apply(args);
        Ok(config)
    }

    pub fn apply(&mut self, args: &ConfigArgs) {
        if let Some(input) = &args.input {
            self.input_dir.clone_from(input);
        }
        if let Some(output) = &args.output {
            self.output_dir.clone_from(output);
        }
        if let Some(viewer) = &args.viewer {
            self.viewer = Some(viewer.clone());
        }
        if args.no_preview {
            self.viewer = None;
        }
        if let Some(log_file) = &args.log_file {
            self.log_file.clone_from(log_file);
        }
        if let Some(backup) = &args.backup_log_file {
            self.backup_log_file.clone_from(backup);
        }
        if let Some(format) = args.log_format {
            self.log_format = format;
        }
    }

    pub fn bundle_log(&self) -> BundleLog {
        BundleLog::new(&self.log_file, &self.backup_log_file, self.log_format)
    }
}

/// `{config_dir}/blueprint-sorter/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
