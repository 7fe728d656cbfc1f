use crate::error::{KyrelError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DATA_FILENAME: &str = "datos.json";
const DEFAULT_RECENT_MOVEMENTS: usize = 4;

/// Configuration for kyrel, stored in `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KyrelConfig {
    /// Where the data document lives. Relative paths resolve against the
    /// config directory; unset means `datos.json` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// How many ledger entries the dashboard shows.
    #[serde(default = "default_recent_movements")]
    pub recent_movements: usize,
}

fn default_recent_movements() -> usize {
    DEFAULT_RECENT_MOVEMENTS
}

impl Default for KyrelConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            recent_movements: DEFAULT_RECENT_MOVEMENTS,
        }
    }
}

impl KyrelConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KyrelError::Persistence)?;
        serde_json::from_str(&content).map_err(|e| {
            KyrelError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KyrelError::Persistence)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KyrelError::Serialization)?;
        fs::write(config_path, content).map_err(KyrelError::Persistence)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            "recent-movements" => Some(self.recent_movements.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "recent-movements" => {
                self.recent_movements = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("recent-movements expects a number, got '{}'", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// The data file this config points at.
    pub fn resolve_data_file(&self, config_dir: &Path, data_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => config_dir.join(path),
            None => data_dir.join(DATA_FILENAME),
        }
    }
}
