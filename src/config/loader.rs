//! Configuration structures and loading logic.

use crate::config::modes::ProgressMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Network and site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Site base URL used to resolve relative file paths.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Maximum number of simultaneous downloads.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Prefix for per-thread folder names.
    #[serde(default = "default_folder_prefix")]
    pub folder_prefix: String,

    /// Progress reporting mode (live or poll).
    #[serde(default)]
    pub progress_mode: ProgressMode,

    /// Whether to show the download progress line.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            concurrency: default_concurrency(),
            folder_prefix: default_folder_prefix(),
            progress_mode: ProgressMode::default(),
            show_downloads: true,
        }
    }
}

fn default_base_url() -> String {
    "https://2ch.hk/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

fn default_concurrency() -> usize {
    6
}

fn default_folder_prefix() -> String {
    "2ch_files".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.network.base_url, "https://2ch.hk/");
        assert_eq!(config.options.concurrency, 6);
        assert_eq!(config.options.folder_prefix, "2ch_files");
        assert_eq!(config.options.progress_mode, ProgressMode::Live);
        assert!(config.options.show_downloads);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: Config = toml::from_str(
            r#"
            [options]
            concurrency = 2
            progress_mode = "poll"
            "#,
        )
        .unwrap();
        assert_eq!(config.options.concurrency, 2);
        assert_eq!(config.options.progress_mode, ProgressMode::Poll);
        // Untouched sections keep their defaults
        assert_eq!(config.network.base_url, "https://2ch.hk/");
    }
}
