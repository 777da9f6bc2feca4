// src/consts.rs
//! Shared constants — security parameters and wire-format details

/// Master key length for every supported cipher (256-bit)
pub const KEY_LEN: usize = 32;

/// IV / nonce length for every supported cipher (96-bit)
pub const IV_LEN: usize = 12;

/// Authentication tag length for every supported cipher
pub const TAG_LEN: usize = 16;

/// PBKDF2-HMAC-SHA512 rounds for key and IV stretching.
// Inputs are already high-entropy; this only keeps the KDF out of a tight loop.
pub const KDF_ITERATIONS: u32 = 2412;

/// Random salt drawn fresh on every KDF call
pub const KDF_SALT_LEN: usize = 128;

/// Random secret used when the caller supplies none
pub const KDF_SEED_LEN: usize = 128;

/// Field separator inside the (pre-base64) envelope
pub const ENVELOPE_SEPARATOR: char = ':';

/// Number of fields in an envelope: id, algorithm, iv, tag, ciphertext
pub const ENVELOPE_FIELDS: usize = 5;

/// Environment variable pointing at the TOML config file
pub const CONFIG_ENV_VAR: &str = "EKR_CONFIG";

/// Config file used when `EKR_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "keyring.toml";
