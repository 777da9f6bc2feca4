// src/key.rs
//! Named master keys and their `{"id", "value"}` text form

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::error::Category;
use uuid::Uuid;

use crate::aliases::{DerivedBytes, MasterKey32};
use crate::consts::KEY_LEN;
use crate::error::{CoreError, Result};
use crate::key_ops::generate_material;

/// A named 256-bit symmetric master key.
///
/// Keys are inert on their own; they protect nothing until loaded into a
/// [`KeyRegistry`](crate::registry::KeyRegistry). Material is zeroized on drop
/// and redacted from `Debug` output.
pub struct Key {
    id: String,
    material: MasterKey32,
}

#[derive(Deserialize)]
struct SerializedKey {
    id: String,
    value: String,
}

impl Key {
    /// New key with a random UUID v4 id and fresh material
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            material: generate_material(),
        }
    }

    /// New key with fresh material under a caller-chosen id
    pub fn with_id(id: impl Into<String>) -> Result<Self> {
        let id = checked_id(id.into())?;
        Ok(Self {
            id,
            material: generate_material(),
        })
    }

    /// Rebuild a key from its id and base64-encoded material
    pub fn from_base64(id: impl Into<String>, value: &str) -> Result<Self> {
        let id = checked_id(id.into())?;
        let decoded = DerivedBytes::new(
            STANDARD
                .decode(value.trim())
                .map_err(|_| CoreError::MalformedKey("key value is not valid base64".into()))?,
        );
        let bytes = decoded.expose_secret();
        if bytes.len() != KEY_LEN {
            return Err(CoreError::MalformedKey(format!(
                "key value must decode to {KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut material = [0u8; KEY_LEN];
        material.copy_from_slice(bytes);
        Ok(Self {
            id,
            material: MasterKey32::new(material),
        })
    }

    /// Parse the `{"id": ..., "value": ...}` form produced by [`Key::to_json`]
    pub fn from_json(serialized: &str) -> Result<Self> {
        let parsed: SerializedKey = serde_json::from_str(serialized).map_err(|e| {
            // serde messages may quote input; keep material out of the error
            let reason = match e.classify() {
                Category::Data => "serialized key must have string fields \"id\" and \"value\"",
                Category::Syntax | Category::Eof | Category::Io => "serialized key is not valid JSON",
            };
            CoreError::MalformedKey(reason.into())
        })?;
        Self::from_base64(parsed.id, &parsed.value)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw key material
    pub fn material(&self) -> &[u8] {
        &self.material.expose_secret()[..]
    }

    /// Base64-encoded key material
    pub fn value(&self) -> String {
        STANDARD.encode(self.material())
    }

    /// Serialize as `{"id": ..., "value": ...}` for text secret stores.
    ///
    /// The output contains the raw secret; treat it like the key itself.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "id": self.id,
            "value": self.value(),
        })
        .to_string()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("id", &self.id)
            .field("material", &"[REDACTED]")
            .finish()
    }
}

fn checked_id(id: String) -> Result<String> {
    if id.is_empty() {
        return Err(CoreError::MalformedKey("key id must not be empty".into()));
    }
    Ok(id)
}

/// Construct a key without registering it.
///
/// `id` defaults to a random UUID v4; `material` is base64 and defaults to
/// freshly generated bytes.
pub fn create_key(id: Option<&str>, material: Option<&str>) -> Result<Key> {
    let id = id.map_or_else(|| Uuid::new_v4().to_string(), str::to_owned);
    match material {
        Some(value) => Key::from_base64(id, value),
        None => Key::with_id(id),
    }
}
