use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CPU_SAMPLE_WINDOW_MS, DEFAULT_FAREWELL_PAUSE_SECS, DEFAULT_LOW_BATTERY_THRESHOLD,
    DEFAULT_PROBE_ADDRESS, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_SPEECH_RATE,
};

/// Outbound connectivity probe settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConnectivityConfig {
    pub address: String,
    pub timeout_secs: u64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_PROBE_ADDRESS.to_string(),
            timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}

impl ConnectivityConfig {
    /// Parse the configured probe address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.address
            .parse()
            .context(format!("Invalid connectivity probe address: {}", self.address))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Speech synthesis settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Words per minute
    pub rate: u32,
    pub prefer_female_voice: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: DEFAULT_SPEECH_RATE,
            prefer_female_voice: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub low_battery_threshold: u8,
    pub cpu_sample_window_ms: u64,
    pub connectivity: ConnectivityConfig,
    pub farewell_pause_secs: u64,
    pub report_volume: bool,
    pub speech: SpeechConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            low_battery_threshold: DEFAULT_LOW_BATTERY_THRESHOLD,
            cpu_sample_window_ms: DEFAULT_CPU_SAMPLE_WINDOW_MS,
            connectivity: ConnectivityConfig::default(),
            farewell_pause_secs: DEFAULT_FAREWELL_PAUSE_SECS,
            report_volume: true,
            speech: SpeechConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: ReportConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml).context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Create a default configuration YAML file
    pub fn create_default_config_file(path: &Path) -> Result<()> {
        ReportConfig::default().save_to_yaml_file(path)
    }

    /// Reject values that would make a reporter meaningless
    pub fn validate(&self) -> Result<()> {
        if self.low_battery_threshold > 100 {
            return Err(anyhow!(
                "low_battery_threshold must be between 0 and 100, got {}",
                self.low_battery_threshold
            ));
        }
        if self.cpu_sample_window_ms == 0 {
            return Err(anyhow!("cpu_sample_window_ms must be greater than zero"));
        }
        if self.connectivity.timeout_secs == 0 {
            return Err(anyhow!("connectivity.timeout_secs must be greater than zero"));
        }
        self.connectivity.socket_addr()?;
        Ok(())
    }

    pub fn cpu_sample_window(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_window_ms)
    }

    pub fn farewell_pause(&self) -> Duration {
        Duration::from_secs(self.farewell_pause_secs)
    }
}

/// Load the configuration file if one was given, otherwise use defaults.
///
/// Unlike a missing optional file, an explicitly named path that does not
/// exist is an error.
pub fn load_config(config_path: Option<&Path>) -> Result<ReportConfig> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
            ReportConfig::from_yaml_file(path)
        }
        None => {
            debug!("No config file given, using defaults");
            Ok(ReportConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.low_battery_threshold, 20);
        assert_eq!(config.cpu_sample_window(), Duration::from_secs(1));
        assert_eq!(config.connectivity.address, "8.8.8.8:53");
        assert_eq!(config.connectivity.timeout(), Duration::from_secs(3));
        assert_eq!(config.farewell_pause(), Duration::from_secs(2));
        assert!(config.report_volume);
        assert!(config.speech.enabled);
        assert_eq!(config.speech.rate, 185);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_load_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        ReportConfig::create_default_config_file(&path).unwrap();
        assert!(path.exists());

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded, ReportConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.yaml");
        fs::write(
            &path,
            "low_battery_threshold: 35\nspeech:\n  enabled: false\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.low_battery_threshold, 35);
        assert!(!config.speech.enabled);
        assert_eq!(config.speech.rate, 185);
        assert_eq!(config.cpu_sample_window_ms, 1000);
        assert_eq!(config.connectivity, ConnectivityConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = ReportConfig::default();
        config.low_battery_threshold = 150;
        assert!(config.validate().is_err());

        let mut config = ReportConfig::default();
        config.cpu_sample_window_ms = 0;
        assert!(config.validate().is_err());

        let mut config = ReportConfig::default();
        config.connectivity.address = "not an address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        fs::write(&path, "low_battery_threshold: [unclosed").unwrap();
        assert!(ReportConfig::from_yaml_file(&path).is_err());
    }
}
