// src/error.rs
//! Public error type for the entire crate
//!
//! Variants carry key ids where useful, never key material or plaintext.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("key id {id:?} has already been loaded")]
    DuplicateKey { id: String },

    #[error("key id {id:?} has not been loaded")]
    UnknownKey { id: String },

    #[error("no current key has been designated")]
    NoCurrentKey,

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("key id {id:?} is the current key and cannot be retired")]
    KeyInUse { id: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}
