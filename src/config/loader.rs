//! Configuration File Loading
//!
//! Handles loading and saving configuration files from various locations
//! with support for multiple formats and fallback mechanisms.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to create default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration with default options
    pub fn load() -> Result<Config> {
        Self::load_with_options(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(options: LoadOptions) -> Result<Config> {
        let mut loader = Self::new();

        // Try to find and load existing configuration
        if let Some((path, config)) = loader.find_and_load_config()? {
            debug!(path = %path.display(), "configuration loaded");
            loader.current_path = Some(path);

            if options.validate {
                loader.validate_config(&config)?;
            }

            return Ok(config);
        }

        // No configuration found, create default if requested
        if options.create_default {
            let config = Config::default();
            if options.validate {
                loader.validate_config(&config)?;
            }
            Ok(config)
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let loader = Self::new();
        let config = loader.load_config_file(path)?;
        loader.validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to the current path or default location
    pub fn save(&self, config: &Config) -> Result<PathBuf> {
        let path = self
            .current_path
            .clone()
            .unwrap_or_else(Self::get_default_config_path);

        self.save_to_path(config, &path)?;
        Ok(path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Determine format from file extension, defaulting to TOML
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                }
            })?,
            _ => toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?,
        };

        fs::write(path, content).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for dir in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = Self::config_path_for_format(dir, *format);
                if config_path.exists() {
                    let config = self.load_config_file(&config_path)?;
                    return Ok(Some((config_path, config)));
                }
            }
        }
        Ok(None)
    }

    /// Load and parse a single configuration file
    fn load_config_file(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
            _ => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Validate a loaded configuration
    fn validate_config(&self, config: &Config) -> Result<()> {
        if config.device.baud_rate == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "device.baud_rate".to_string(),
                reason: "baud rate must be non-zero".to_string(),
            });
        }
        if config.session.open_timeout_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "session.open_timeout_ms".to_string(),
                reason: "open timeout must be non-zero".to_string(),
            });
        }
        if let Some(port) = &config.device.port {
            if port.is_empty() {
                return Err(Error::ConfigValidationFailed {
                    field: "device.port".to_string(),
                    reason: "port must not be empty when set".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Directories searched for a configuration file, in priority order
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory first (project-local overrides)
        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd);
        }

        // Per-user configuration directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("boardlink"));
        }

        // Home dotfile fallback
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".boardlink"));
        }

        paths
    }

    /// Default location for a freshly created configuration file
    fn get_default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("boardlink")
            .join("config.toml")
    }

    /// File name a format uses inside a search directory
    fn config_path_for_format(dir: &Path, format: ConfigFormat) -> PathBuf {
        match format {
            ConfigFormat::Toml => dir.join("boardlink.toml"),
            ConfigFormat::Json => dir.join("boardlink.json"),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
