use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "refseed.toml";
pub const DEFAULT_DATA_DIR: &str = "database/db";
pub const DEFAULT_FIXTURE_DIR: &str = "fixtures";

/// Optional operator configuration, merged under CLI flags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    pub data_dir: Option<PathBuf>,
    pub fixture_dir: Option<PathBuf>,
    pub sentinel: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads an explicit config file, or the default one when present.
pub fn load_config(path: Option<&Path>) -> Result<SeedConfig, ConfigError> {
    let path = match path {
        Some(explicit) => {
            if !explicit.is_file() {
                return Err(ConfigError::NotFound(explicit.to_path_buf()));
            }
            explicit.to_path_buf()
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(SeedConfig::default());
            }
            default.to_path_buf()
        }
    };

    let text = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
