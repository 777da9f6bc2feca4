// src/crypto/envelope.rs
//! Envelope wire format
//!
//! ```text
//! base64( hex(key id) : hex(algorithm) : hex(iv) : hex(tag) : hex(ciphertext) )
//! ```
//!
//! Lowercase hex, standard padded base64, no associated data. Any structural
//! defect is reported as [`CoreError::Authentication`] so a malformed value is
//! indistinguishable from a tampered one.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::{ENVELOPE_FIELDS, ENVELOPE_SEPARATOR, IV_LEN, TAG_LEN};
use crate::enums::EncryptionAlgorithm;
use crate::error::{CoreError, Result};

/// A parsed encrypted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub key_id: String,
    /// Algorithm identifier as written; checked by [`Envelope::algorithm`]
    pub algorithm: String,
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn encode(&self) -> String {
        let joined = [
            hex::encode(self.key_id.as_bytes()),
            hex::encode(self.algorithm.as_bytes()),
            hex::encode(self.iv),
            hex::encode(self.tag),
            hex::encode(&self.ciphertext),
        ]
        .join(&ENVELOPE_SEPARATOR.to_string());
        STANDARD.encode(joined)
    }

    pub fn parse(encoded: &str) -> Result<Self> {
        let raw = STANDARD
            .decode(encoded.trim())
            .map_err(|_| malformed("not valid base64"))?;
        let text = String::from_utf8(raw).map_err(|_| malformed("not valid text"))?;

        let fields: Vec<&str> = text.split(ENVELOPE_SEPARATOR).collect();
        if fields.len() != ENVELOPE_FIELDS {
            return Err(malformed(&format!(
                "expected {ENVELOPE_FIELDS} fields, found {}",
                fields.len()
            )));
        }

        let key_id = String::from_utf8(hex_field(fields[0], "key id")?)
            .map_err(|_| malformed("key id is not valid UTF-8"))?;
        let algorithm = String::from_utf8(hex_field(fields[1], "algorithm")?)
            .map_err(|_| malformed("algorithm is not valid UTF-8"))?;
        let iv: [u8; IV_LEN] = hex_field(fields[2], "iv")?
            .try_into()
            .map_err(|_| malformed(&format!("iv must be {IV_LEN} bytes")))?;
        let tag: [u8; TAG_LEN] = hex_field(fields[3], "tag")?
            .try_into()
            .map_err(|_| malformed(&format!("tag must be {TAG_LEN} bytes")))?;
        let ciphertext = hex_field(fields[4], "ciphertext")?;

        Ok(Self {
            key_id,
            algorithm,
            iv,
            tag,
            ciphertext,
        })
    }

    /// The embedded algorithm, if it is on the allow-list
    pub fn algorithm(&self) -> Result<EncryptionAlgorithm> {
        self.algorithm.parse()
    }
}

fn hex_field(field: &str, name: &str) -> Result<Vec<u8>> {
    hex::decode(field).map_err(|_| malformed(&format!("{name} is not valid hex")))
}

fn malformed(reason: &str) -> CoreError {
    CoreError::Authentication(format!("malformed envelope: {reason}"))
}

/// Id of the key an envelope was sealed under, without decrypting it
pub fn envelope_key_id(encoded: &str) -> Result<String> {
    Envelope::parse(encoded).map(|envelope| envelope.key_id)
}
