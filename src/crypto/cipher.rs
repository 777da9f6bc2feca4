// src/crypto/cipher.rs
//! Detached-tag AEAD dispatch over the allow-listed algorithms

use aes_gcm::aead::{AeadInPlace, KeyInit, Nonce, Tag};
use aes_gcm::Aes256Gcm;
use chacha20poly1305::ChaCha20Poly1305;

use crate::consts::{IV_LEN, TAG_LEN};
use crate::enums::EncryptionAlgorithm;
use crate::error::{CoreError, Result};

/// Encrypt `plaintext`, returning the ciphertext and its detached tag
pub(crate) fn seal(
    algorithm: EncryptionAlgorithm,
    key: &[u8],
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    match algorithm {
        EncryptionAlgorithm::Aes256Gcm => seal_with(Aes256Gcm::new_from_slice(key), iv, plaintext),
        EncryptionAlgorithm::ChaCha20Poly1305 => {
            seal_with(ChaCha20Poly1305::new_from_slice(key), iv, plaintext)
        }
    }
}

/// Verify `tag` and decrypt `ciphertext`
pub(crate) fn open(
    algorithm: EncryptionAlgorithm,
    key: &[u8],
    iv: &[u8; IV_LEN],
    tag: &[u8; TAG_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    match algorithm {
        EncryptionAlgorithm::Aes256Gcm => {
            open_with(Aes256Gcm::new_from_slice(key), iv, tag, ciphertext)
        }
        EncryptionAlgorithm::ChaCha20Poly1305 => {
            open_with(ChaCha20Poly1305::new_from_slice(key), iv, tag, ciphertext)
        }
    }
}

fn seal_with<C, E>(
    cipher: std::result::Result<C, E>,
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])>
where
    C: AeadInPlace,
{
    let cipher = cipher.map_err(|_| invalid_key_length())?;
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::<C>::from_slice(iv), b"", &mut buffer)
        .map_err(|_| CoreError::Authentication("encryption failed".into()))?;
    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);
    Ok((buffer, tag_bytes))
}

fn open_with<C, E>(
    cipher: std::result::Result<C, E>,
    iv: &[u8; IV_LEN],
    tag: &[u8; TAG_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>>
where
    C: AeadInPlace,
{
    let cipher = cipher.map_err(|_| invalid_key_length())?;
    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            Nonce::<C>::from_slice(iv),
            b"",
            &mut buffer,
            Tag::<C>::from_slice(tag),
        )
        .map_err(|_| {
            CoreError::Authentication("tag mismatch: corrupted envelope or wrong key".into())
        })?;
    Ok(buffer)
}

fn invalid_key_length() -> CoreError {
    CoreError::MalformedKey("key material has the wrong length for this cipher".into())
}
