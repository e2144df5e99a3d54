//! Scanner configuration management

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use usb_metadata::{DEFAULT_SYSFS_ROOT, PathRadix};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub scanner: ScannerSettings,
    /// Sysfs lookup configuration
    #[serde(default)]
    pub sysfs: SysfsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerSettings {
    pub log_level: String,
    /// Threads filling device metadata concurrently
    #[serde(default = "ScannerSettings::default_workers")]
    pub workers: usize,
}

impl ScannerSettings {
    fn default_workers() -> usize {
        4
    }
}

/// Sysfs lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SysfsSettings {
    /// Directory with one entry per USB device (`~` is expanded)
    #[serde(default = "SysfsSettings::default_root")]
    pub root: PathBuf,
    /// Base of the bus/device numbers in path identifiers (10 or 16)
    #[serde(default = "SysfsSettings::default_path_radix")]
    pub path_radix: u32,
}

impl Default for SysfsSettings {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            path_radix: Self::default_path_radix(),
        }
    }
}

impl SysfsSettings {
    fn default_root() -> PathBuf {
        PathBuf::from(DEFAULT_SYSFS_ROOT)
    }

    fn default_path_radix() -> u32 {
        10
    }

    /// Root with a leading `~` expanded
    pub fn expanded_root(&self) -> PathBuf {
        expand_path(&self.root)
    }

    /// Path radix; falls back to decimal if the value was never validated
    pub fn radix(&self) -> PathRadix {
        PathRadix::from_base(self.path_radix).unwrap_or_default()
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            scanner: ScannerSettings {
                log_level: "info".to_string(),
                workers: ScannerSettings::default_workers(),
            },
            sysfs: SysfsSettings::default(),
        }
    }
}

impl ScannerConfig {
    /// Load configuration from the specified path
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            expand_path(&p)
        } else {
            // Try standard locations in order
            let candidates = vec![
                Self::default_path(),
                PathBuf::from("/etc/usb-metadata/config.toml"),
            ];

            candidates
                .into_iter()
                .find(|p| p.exists())
                .ok_or_else(|| anyhow!("No configuration file found, using defaults"))?
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        tracing::info!("Loaded configuration from: {}", config_path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: ScannerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default() -> Self {
        match Self::load(None) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Failed to load config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the specified path
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("usb-metadata").join("config.toml")
        } else {
            PathBuf::from(".config/usb-metadata/config.toml")
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !common::is_valid_log_level(&self.scanner.log_level) {
            return Err(anyhow!(
                "Invalid log level '{}', must be one of: {}",
                self.scanner.log_level,
                common::LOG_LEVELS.join(", ")
            ));
        }

        if self.scanner.workers == 0 {
            return Err(anyhow!("workers must be at least 1"));
        }

        if PathRadix::from_base(self.sysfs.path_radix).is_none() {
            return Err(anyhow!(
                "Invalid path_radix {}, must be 10 or 16",
                self.sysfs.path_radix
            ));
        }

        if self.sysfs.root.as_os_str().is_empty() {
            return Err(anyhow!("sysfs root must not be empty"));
        }

        Ok(())
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert_eq!(config.scanner.log_level, "info");
        assert_eq!(config.scanner.workers, 4);
        assert_eq!(config.sysfs.root, PathBuf::from("/sys/bus/usb/devices"));
        assert_eq!(config.sysfs.radix(), PathRadix::Decimal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ScannerConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = ScannerConfig::parse(&toml_str).unwrap();

        assert_eq!(config.scanner.log_level, parsed.scanner.log_level);
        assert_eq!(config.sysfs.root, parsed.sysfs.root);
        assert_eq!(config.sysfs.path_radix, parsed.sysfs.path_radix);
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = ScannerConfig::default();
        config.scanner.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        config.scanner.log_level = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_radix_and_workers() {
        let mut config = ScannerConfig::default();
        config.sysfs.path_radix = 16;
        assert!(config.validate().is_ok());
        assert_eq!(config.sysfs.radix(), PathRadix::Hex);

        config.sysfs.path_radix = 8;
        assert!(config.validate().is_err());

        let mut config = ScannerConfig::default();
        config.scanner.workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_expanded_root_keeps_absolute_paths() {
        let settings = SysfsSettings::default();
        assert_eq!(settings.expanded_root(), PathBuf::from("/sys/bus/usb/devices"));
    }
}
