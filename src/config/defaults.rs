// src/config/defaults.rs
use crate::config::app::{CryptoSettings, RegistrySettings};
use crate::consts::KDF_ITERATIONS;
use crate::enums::EncryptionAlgorithm;

pub fn default_crypto() -> CryptoSettings {
    CryptoSettings {
        algorithm: EncryptionAlgorithm::default(),
        kdf_iterations: KDF_ITERATIONS,
    }
}

pub fn default_registry() -> RegistrySettings {
    RegistrySettings {
        promote_first_loaded: false,
    }
}
