// src/config/mod.rs
//! Configuration system for envelope-keyring
//!
//! TOML file with env-var path override; every field is optional.

pub use app::{load, load_from, Config, CryptoSettings, RegistrySettings};

mod app;
mod defaults;
