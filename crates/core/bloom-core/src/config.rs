use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub theme_index: usize,
    /// Base URL of the chat backend. When unset, chat replies are simulated
    /// locally and nothing leaves the process.
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default = "default_quote_interval_secs")]
    pub quote_interval_secs: u64,
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_quote_interval_secs() -> u64 {
    4
}

fn default_reply_delay_ms() -> u64 {
    1500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_index: 0,
            backend_url: None,
            quote_interval_secs: default_quote_interval_secs(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    pub config: Config,
}

impl ConfigManager {
    pub fn new(base_dir: &std::path::Path) -> AppResult<Self> {
        let config_path = base_dir.join("config.toml");
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(AppError::IoGeneric)?;
            toml::from_str(&content).unwrap_or_default()
        } else {
            Config::default()
        };

        // Auto-save default if missing
        if !config_path.exists() {
            if let Err(e) = Self::save_to_path(&config, &config_path) {
                log::warn!("failed to save default config: {}", e);
            }
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn save(&self) -> AppResult<()> {
        Self::save_to_path(&self.config, &self.config_path)
    }

    fn save_to_path(config: &Config, path: &PathBuf) -> AppResult<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| AppError::Config(e.to_string()))?;

        // Atomic write: write to tempfile then rename to prevent corruption on crash
        let parent = path.parent().unwrap_or(std::path::Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(AppError::IoGeneric)?;
        std::fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(path)
            .map_err(|e| AppError::IoGeneric(e.error))?;
        Ok(())
    }

    pub fn update_theme(&mut self, index: usize) -> AppResult<()> {
        self.config.theme_index = index;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_created_when_missing() {
        let dir = TempDir::new().unwrap();
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert_eq!(config_manager.config.quote_interval_secs, 4);
        assert_eq!(config_manager.config.reply_delay_ms, 1500);
        assert!(config_manager.config.backend_url.is_none());
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    fn config_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        {
            let mut config_manager = ConfigManager::new(dir.path()).unwrap();
            config_manager.update_theme(2).unwrap();
        }
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert_eq!(config_manager.config.theme_index, 2);
    }
}
