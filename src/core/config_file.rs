//! User configuration file handling
//!
//! Manages settings from ~/.config/slcgen/settings.json

use crate::core::errors::{SlcError, SlcResult};
use crate::font_source::MetricOverrides;
use crate::tools::ArcStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/slcgen/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Metric overrides, with the same names as the resolved metrics
    pub metrics: MetricOverrides,
    /// Default output path
    pub output: Option<PathBuf>,
    /// Default construction of rounded corners
    pub arc_style: Option<ArcStyle>,
}

impl ConfigFile {
    /// Get the path to the slcgen config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("slcgen")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Read and parse one settings file.
    pub fn read(path: &Path) -> SlcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| SlcError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = serde_json::from_str(&contents).map_err(|e| SlcError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Loaded settings from {:?}", path);
        Ok(config)
    }

    /// Load the settings for this run.
    ///
    /// An explicit path must exist and parse. The default file is optional:
    /// when it is missing nothing is loaded, and when it is broken a warning
    /// is logged and it is ignored.
    pub fn load(explicit: Option<&Path>) -> SlcResult<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        match Self::read(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Ignoring settings file: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to `path`, creating its directory if needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Template written by `--new-config`: every key present, nothing set
    /// except the defaults that are not derived from other metrics.
    pub fn template() -> Self {
        Self {
            metrics: MetricOverrides::default(),
            output: Some(PathBuf::from("out.sfd")),
            arc_style: Some(ArcStyle::Polygon),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/slcgen directory with its logs/ subdirectory
    /// 2. A settings.json template, unless one already exists
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            Self::template().save(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - Pass --log-dir {:?} to keep logs there", logs_dir);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        ConfigFile::template().save(&path).unwrap();
        assert_eq!(ConfigFile::read(&path).unwrap(), ConfigFile::template());
    }

    #[test]
    fn test_partial_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "metrics": { "ascent": 900, "box_line_truncate": false } }"#).unwrap();
        let config = ConfigFile::read(&path).unwrap();
        assert_eq!(config.metrics.ascent, Some(900.0));
        assert_eq!(config.metrics.box_line_truncate, Some(false));
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "metrics": { "asc": 900 } }"#).unwrap();
        assert!(matches!(ConfigFile::read(&path), Err(SlcError::Config { .. })));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(ConfigFile::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_initialize_keeps_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.json");
        fs::write(&settings, r#"{ "output": "mine.sfd" }"#).unwrap();
        ConfigFile::initialize_in(dir.path()).unwrap();
        assert!(dir.path().join("logs").is_dir());
        let config = ConfigFile::read(&settings).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("mine.sfd")));
    }
}
