// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Every fresh byte string this crate needs, master key material and
//! per-envelope IVs alike, comes out of [`derive_bytes`]: PBKDF2-HMAC-SHA512
//! over a secret plus a salt that is freshly randomized on every call.
//! The output is therefore never reproducible and must not be used where a
//! deterministic derivation is required.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha512;

use crate::aliases::{DerivedBytes, MasterKey32};
use crate::consts::{IV_LEN, KDF_ITERATIONS, KDF_SALT_LEN, KDF_SEED_LEN, KEY_LEN};
use crate::key::Key;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

/// Stretch `secret` (or a fresh random seed) into `length` pseudorandom bytes
#[inline]
pub fn derive_bytes(length: usize, secret: Option<&[u8]>) -> DerivedBytes {
    derive_bytes_with(KDF_ITERATIONS, length, secret)
}

/// [`derive_bytes`] with an explicit PBKDF2 round count
pub fn derive_bytes_with(iterations: u32, length: usize, secret: Option<&[u8]>) -> DerivedBytes {
    let salt = random_bytes(KDF_SALT_LEN);
    let mut out = vec![0u8; length];
    match secret {
        Some(secret) => pbkdf2_hmac::<Sha512>(secret, &salt, iterations, &mut out),
        None => {
            let seed = DerivedBytes::new(random_bytes(KDF_SEED_LEN));
            pbkdf2_hmac::<Sha512>(seed.expose_secret(), &salt, iterations, &mut out);
        }
    }
    DerivedBytes::new(out)
}

/// Generate new 256-bit master key material
pub fn generate_material() -> MasterKey32 {
    let derived = derive_bytes(KEY_LEN, None);
    let mut material = [0u8; KEY_LEN];
    material.copy_from_slice(derived.expose_secret());
    MasterKey32::new(material)
}

/// Fresh 96-bit IV seeded by the master key that will use it
pub fn derive_iv(material: &[u8], iterations: u32) -> [u8; IV_LEN] {
    let derived = derive_bytes_with(iterations, IV_LEN, Some(material));
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(derived.expose_secret());
    iv
}

/// Multiple string representations of a key's material for export
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &Key) -> KeyRepr {
    let material = key.material();
    KeyRepr {
        hex: hex::encode(material),
        base64: STANDARD.encode(material),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(material),
    }
}
