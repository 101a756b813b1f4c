use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE: &str = "library.txt";

pub const KEYS: [&str; 3] = ["default-file", "confirm-overwrite", "autoload-file"];

/// Configuration for bookcat, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// File used by save/load when no name is given
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Ask before replacing an existing file on save
    #[serde(default = "default_confirm_overwrite")]
    pub confirm_overwrite: bool,

    /// Loaded into the catalog when the menu starts
    #[serde(default)]
    pub autoload_file: Option<PathBuf>,
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

fn default_confirm_overwrite() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            confirm_overwrite: default_confirm_overwrite(),
            autoload_file: None,
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-file" => Some(self.default_file.clone()),
            "confirm-overwrite" => Some(self.confirm_overwrite.to_string()),
            "autoload-file" => Some(
                self.autoload_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("default-file cannot be empty".to_string());
                }
                self.default_file = value.to_string();
            }
            "confirm-overwrite" => {
                self.confirm_overwrite = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for confirm-overwrite: {}", value))?;
            }
            "autoload-file" => {
                let value = value.trim();
                self.autoload_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
