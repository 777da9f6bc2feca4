// src/crypto/encrypt.rs
use tracing::debug;

use super::cipher::seal;
use super::envelope::Envelope;
use crate::config::CryptoSettings;
use crate::error::Result;
use crate::key_ops::derive_iv;
use crate::registry::KeyRegistry;

/// Encrypt `plaintext` under the registry's current key with default settings
pub fn encrypt(registry: &KeyRegistry, plaintext: &str) -> Result<String> {
    encrypt_with(registry, plaintext, &CryptoSettings::default())
}

/// Encrypt `plaintext` under the registry's current key.
///
/// A fresh IV is drawn per call, so equal plaintexts never share an envelope.
pub fn encrypt_with(
    registry: &KeyRegistry,
    plaintext: &str,
    settings: &CryptoSettings,
) -> Result<String> {
    let key = registry.current_key()?;
    let iv = derive_iv(key.material(), settings.kdf_iterations);
    let (ciphertext, tag) = seal(settings.algorithm, key.material(), &iv, plaintext.as_bytes())?;

    debug!(key_id = key.id(), algorithm = %settings.algorithm, "encrypted value");

    Ok(Envelope {
        key_id: key.id().to_owned(),
        algorithm: settings.algorithm.name().to_owned(),
        iv,
        tag,
        ciphertext,
    }
    .encode())
}
