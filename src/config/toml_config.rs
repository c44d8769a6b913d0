use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub backend: String,
    pub data_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config: TomlConfig =
            toml::from_str(&content).map_err(|e| StoreError::ConfigError {
                message: format!("Failed to parse TOML config: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("store.backend", &self.store.backend, &["memory", "json"])?;

        if self.store.backend == "json" {
            match &self.store.data_path {
                Some(path) => validate_path("store.data_path", path)?,
                None => {
                    return Err(StoreError::ConfigError {
                        message: "store.data_path is required for the json backend".to_string(),
                    })
                }
            }
        }

        Ok(())
    }
}
