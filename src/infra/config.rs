//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/dev.toml
//!
//! Missing file or missing sections fall back to engine defaults so the CLI
//! harness works out of the box.

use crate::domain::types::{AssetKind, EvidenceRequirements};
use crate::services::location::LocationPolicy;
use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Acquisition timeout in milliseconds
    #[serde(default = "default_location_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum cached-reading age in seconds
    #[serde(default = "default_max_reading_age_s")]
    pub max_reading_age_s: u64,
    /// Prefer the high-accuracy positioning mode
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,
}

fn default_location_timeout_ms() -> u64 {
    10_000
}

fn default_max_reading_age_s() -> u64 {
    60
}

fn default_high_accuracy() -> bool {
    true
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_location_timeout_ms(),
            max_reading_age_s: default_max_reading_age_s(),
            high_accuracy: default_high_accuracy(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceConfig {
    /// Requirements for static (fixed, geofenced) assets
    #[serde(default = "default_static_requirements")]
    pub static_assets: EvidenceRequirements,
    /// Requirements for mobile assets
    #[serde(default = "default_mobile_requirements")]
    pub mobile_assets: EvidenceRequirements,
}

fn default_static_requirements() -> EvidenceRequirements {
    EvidenceRequirements { photo: true, selfie: true }
}

fn default_mobile_requirements() -> EvidenceRequirements {
    EvidenceRequirements { photo: true, selfie: false }
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            static_assets: default_static_requirements(),
            mobile_assets: default_mobile_requirements(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Countdown length before the shutter fires
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u8,
    /// Tick interval in milliseconds (1000 for the visible 3-2-1 count)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_countdown_secs() -> u8 {
    3
}

fn default_tick_ms() -> u64 {
    1000
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { countdown_secs: default_countdown_secs(), tick_ms: default_tick_ms() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    location: LocationConfig,
    #[serde(default)]
    evidence: EvidenceConfig,
    #[serde(default)]
    capture: CaptureConfig,
}

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    file: ConfigFile,
    config_file: String,
}

impl Config {
    /// Load from an explicit path, failing loudly on a broken file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&raw)
            .with_context(|| format!("parse config file {}", path.display()))?;

        Ok(Self { file, config_file: path.display().to_string() })
    }

    /// Load from a path, falling back to defaults when the file is missing
    /// or unreadable
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "config_load_failed_using_defaults");
                Self { file: ConfigFile::default(), config_file: format!("{path} (defaults)") }
            }
        }
    }

    /// Resolve the config path from env or the default location
    pub fn resolve_path(cli_arg: Option<&str>) -> String {
        if let Some(path) = cli_arg {
            return path.to_string();
        }
        env::var("CONFIG_FILE").unwrap_or_else(|_| "config/dev.toml".to_string())
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn location_policy(&self) -> LocationPolicy {
        LocationPolicy {
            high_accuracy: self.file.location.high_accuracy,
            timeout: Duration::from_millis(self.file.location.timeout_ms),
            max_reading_age: Duration::from_secs(self.file.location.max_reading_age_s),
        }
    }

    pub fn evidence_requirements(&self, kind: AssetKind) -> EvidenceRequirements {
        match kind {
            AssetKind::Static => self.file.evidence.static_assets,
            AssetKind::Mobile => self.file.evidence.mobile_assets,
        }
    }

    pub fn countdown_secs(&self) -> u8 {
        self.file.capture.countdown_secs
    }

    pub fn capture_tick(&self) -> Duration {
        Duration::from_millis(self.file.capture.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        let policy = config.location_policy();
        assert_eq!(policy.timeout, Duration::from_secs(10));
        assert_eq!(policy.max_reading_age, Duration::from_secs(60));
        assert!(policy.high_accuracy);

        assert_eq!(config.countdown_secs(), 3);
        assert!(config.evidence_requirements(AssetKind::Static).selfie);
        assert!(!config.evidence_requirements(AssetKind::Mobile).selfie);
    }

    #[test]
    fn test_load_from_missing_path_falls_back() {
        let config = Config::load_from_path("/nonexistent/config.toml");

        assert_eq!(config.countdown_secs(), 3);
        assert!(config.config_file().contains("defaults"));
    }

    #[test]
    fn test_resolve_path_prefers_cli_arg() {
        assert_eq!(Config::resolve_path(Some("custom.toml")), "custom.toml");
    }
}
