use crate::utils::error::{Result, TourError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// TOML counterpart of the command-line options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub sections: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(TourError::ConfigError {
                message: format!("Config file not found: {}", path),
            });
        }

        let content = fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
