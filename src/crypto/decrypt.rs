// src/crypto/decrypt.rs
use tracing::{debug, warn};

use super::cipher::open;
use super::envelope::Envelope;
use crate::error::{CoreError, Result};
use crate::registry::KeyRegistry;

/// Decrypt an envelope with whichever loaded key it names
pub fn decrypt(registry: &KeyRegistry, envelope: &str) -> Result<String> {
    let envelope =
        Envelope::parse(envelope).inspect_err(|e| warn!(error = %e, "rejected envelope"))?;
    let key = registry.resolve(&envelope.key_id)?;
    let algorithm = envelope.algorithm().inspect_err(|_| {
        warn!(
            key_id = key.id(),
            algorithm = %envelope.algorithm,
            "envelope names an unsupported algorithm"
        )
    })?;

    let plaintext = open(
        algorithm,
        key.material(),
        &envelope.iv,
        &envelope.tag,
        &envelope.ciphertext,
    )
    .inspect_err(|_| warn!(key_id = key.id(), %algorithm, "envelope failed authentication"))?;

    debug!(key_id = key.id(), %algorithm, "decrypted value");

    String::from_utf8(plaintext)
        .map_err(|_| CoreError::Authentication("decrypted value is not valid UTF-8".into()))
}
