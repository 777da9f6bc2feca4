// src/lib.rs
//! envelope-keyring — master-key registry with self-describing envelopes
//!
//! Features:
//! - In-memory registry of named 256-bit master keys with one current key
//! - AES-256-GCM (default) or ChaCha20-Poly1305 authenticated encryption
//! - Envelopes carry key id, algorithm, IV and tag, so values survive rotation
//! - Zeroize-on-drop key material via secure-gate
//!
//! ```no_run
//! use envelope_keyring::{decrypt, encrypt, Key, KeyRegistry};
//!
//! let mut registry = KeyRegistry::new();
//! registry.load_current(Key::generate())?;
//! let sealed = encrypt(&registry, "cheese:crackers")?;
//!
//! // Rotate: new values use the new key, old ones still open.
//! registry.load_current(Key::generate())?;
//! assert_eq!(decrypt(&registry, &sealed)?, "cheese:crackers");
//! # Ok::<(), envelope_keyring::CoreError>(())
//! ```
//!
//! Keys are never persisted; hosts reload them (e.g. via [`Key::to_json`] /
//! [`KeyRegistry::load_serialized`]) on every start.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod key;
pub mod key_ops;
pub mod registry;

// Re-export everything users need at the crate root
pub use config::{load as load_config, Config, CryptoSettings, RegistrySettings};
pub use crypto::{
    decrypt, encrypt, encrypt_with, envelope_key_id, reencrypt, reencrypt_with, Envelope,
};
pub use enums::EncryptionAlgorithm;
pub use error::{CoreError, Result};
pub use key::{create_key, Key};
pub use key_ops::{derive_bytes, derive_bytes_with, key_representations, KeyRepr};
pub use registry::KeyRegistry;
