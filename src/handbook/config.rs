use crate::error::{HandbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
/// Storage key whose slot file would be `config.json` itself.
pub const RESERVED_STORAGE_KEY: &str = "config";
pub const DEFAULT_STORAGE_KEY: &str = "handbook-data";

/// Configuration for handbook, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandbookConfig {
    /// Storage key the document is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Ask before deleting a page or resetting the handbook
    #[serde(default = "default_confirm_destructive")]
    pub confirm_destructive: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_confirm_destructive() -> bool {
    true
}

impl Default for HandbookConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            confirm_destructive: default_confirm_destructive(),
        }
    }
}

impl HandbookConfig {
    pub const KEYS: [&'static str; 2] = ["storage-key", "confirm-destructive"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HandbookError::Io)?;
        let config: HandbookConfig =
            serde_json::from_str(&content).map_err(HandbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HandbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HandbookError::Serialization)?;
        fs::write(config_path, content).map_err(HandbookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "confirm-destructive" => Some(self.confirm_destructive.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("storage-key cannot be empty".to_string());
                }
                if value.contains(['/', '\\']) || value.starts_with('.') {
                    return Err(format!("Invalid storage-key: {}", value));
                }
                if value.eq_ignore_ascii_case(RESERVED_STORAGE_KEY) {
                    return Err(format!("storage-key '{}' is reserved for the config file", value));
                }
                self.storage_key = value.to_string();
                Ok(())
            }
            "confirm-destructive" => {
                self.confirm_destructive = parse_bool(value)
                    .ok_or_else(|| format!("Expected true or false, got: {}", value))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
