use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STORE_URL: &str = "http://localhost:3001/persons";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub store: Option<StoreConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: Some(StoreConfig {
                base_url: DEFAULT_STORE_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    pub base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[store]
# Base address of the remote contact store
base_url = "http://localhost:3001/persons"
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: AppConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }

    pub fn store_base_url(&self) -> String {
        self.store
            .as_ref()
            .map(|store| store.base_url.clone())
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string())
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("phonebook").join("app.toml")
    } else {
        PathBuf::from("app.toml")
    }
}
