// src/crypto/mod.rs
//! Envelope codec — pure in-memory operations, no I/O
//!
//! Encryption always uses the registry's current key; decryption uses the
//! key named inside the envelope, so values sealed before a rotation stay
//! readable for as long as their key stays loaded.
mod cipher;
mod decrypt;
mod encrypt;
mod envelope;
mod rotate;

pub use decrypt::decrypt;
pub use encrypt::{encrypt, encrypt_with};
pub use envelope::{envelope_key_id, Envelope};
pub use rotate::{reencrypt, reencrypt_with};
