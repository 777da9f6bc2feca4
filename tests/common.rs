// tests/common.rs
//! Shared test utilities — logging setup and registry fixtures

use std::sync::Arc;

use envelope_keyring::{Key, KeyRegistry};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Fresh registry holding one generated key, already current
#[allow(dead_code)]
pub fn registry_with_current() -> (KeyRegistry, Arc<Key>) {
    let mut registry = KeyRegistry::new();
    let key = registry
        .load_current(Key::generate())
        .expect("load generated key");
    (registry, key)
}

/// Round-trip plaintexts; the first contains the envelope separator
#[allow(dead_code)]
pub const SAMPLES: [&str; 3] = [
    "cheese:crackers",
    "asdjfasjdf2798q2397(*&(*&98q723984798980&()",
    "the quick brown fox jumped over the lazy brown dog",
];
