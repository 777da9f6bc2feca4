// src/config/app.rs
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::EncryptionAlgorithm;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crypto: CryptoSettings,
    pub registry: RegistrySettings,
}

/// Settings for new encryptions; decryption always follows the envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoSettings {
    pub algorithm: EncryptionAlgorithm,
    pub kdf_iterations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Compatibility mode: the first key loaded into an empty registry
    /// becomes current without an explicit `mark_current`.
    pub promote_first_loaded: bool,
}

impl Default for CryptoSettings {
    fn default() -> Self {
        default_crypto()
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        default_registry()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<()> {
        if self.crypto.kdf_iterations == 0 {
            return Err(CoreError::Config(
                "crypto.kdf_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `EKR_CONFIG` (or `keyring.toml`), falling back to defaults if missing
pub fn load() -> Result<Config> {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from(config_path)
}

/// Load config from an explicit path, falling back to defaults if missing
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using built-in defaults");
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    let conf = Config::from_toml_str(&content)?;
    debug!(path = %path.display(), algorithm = %conf.crypto.algorithm, "loaded config");
    Ok(conf)
}
