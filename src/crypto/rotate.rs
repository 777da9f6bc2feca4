// src/crypto/rotate.rs
use tracing::debug;

use super::{decrypt, encrypt_with, envelope_key_id};
use crate::config::CryptoSettings;
use crate::error::Result;
use crate::registry::KeyRegistry;

/// Re-seal an envelope under the current key with default settings
pub fn reencrypt(registry: &KeyRegistry, envelope: &str) -> Result<String> {
    reencrypt_with(registry, envelope, &CryptoSettings::default())
}

/// Pure in-memory rotation: decrypt with the key the envelope names, then
/// encrypt under the current key. Lets callers migrate stored values before
/// retiring an old key.
pub fn reencrypt_with(
    registry: &KeyRegistry,
    envelope: &str,
    settings: &CryptoSettings,
) -> Result<String> {
    let from = envelope_key_id(envelope)?;
    let plaintext = decrypt(registry, envelope)?;
    let rotated = encrypt_with(registry, &plaintext, settings)?;
    debug!(
        from = %from,
        to = registry.current_id().unwrap_or_default(),
        "re-encrypted value"
    );
    Ok(rotated)
}
