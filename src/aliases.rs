// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret holders used throughout envelope-keyring.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(MasterKey32, 32); // 256-bit master key material

// Dynamic secrets
dynamic_alias!(DerivedBytes, Vec<u8>); // KDF output, zeroized on drop
