// src/registry.rs
//! Registry of loaded master keys and the designated current key
//!
//! The registry is an ordinary value: each host, tenant or test owns its own
//! instance and passes it to [`encrypt`](crate::crypto::encrypt) and
//! [`decrypt`](crate::crypto::decrypt). It is not internally synchronized;
//! wrap it in a `Mutex` or `RwLock` to share it between threads.
//!
//! Invariant: `current`, when set, always names a key present in `keys`.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::RegistrySettings;
use crate::error::{CoreError, Result};
use crate::key::Key;

#[derive(Debug, Default)]
pub struct KeyRegistry {
    keys: HashMap<String, Arc<Key>>,
    current: Option<String>,
    settings: RegistrySettings,
}

impl KeyRegistry {
    /// Empty registry; currency is only ever set explicitly
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: RegistrySettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Register a key. Fails without side effects if the id is already loaded.
    pub fn load(&mut self, key: Key) -> Result<Arc<Key>> {
        if self.keys.contains_key(key.id()) {
            warn!(key_id = key.id(), "rejected duplicate key load");
            return Err(CoreError::DuplicateKey {
                id: key.id().to_owned(),
            });
        }

        let key = Arc::new(key);
        self.keys.insert(key.id().to_owned(), Arc::clone(&key));
        debug!(key_id = key.id(), "loaded key");

        if self.current.is_none() && self.settings.promote_first_loaded {
            debug!(key_id = key.id(), "promoted first loaded key to current");
            self.current = Some(key.id().to_owned());
        }

        Ok(key)
    }

    /// Register a key from its `{"id", "value"}` JSON form
    pub fn load_serialized(&mut self, serialized: &str) -> Result<Arc<Key>> {
        let key = Key::from_json(serialized)?;
        self.load(key)
    }

    /// Register a key and make it current in one step
    pub fn load_current(&mut self, key: Key) -> Result<Arc<Key>> {
        let key = self.load(key)?;
        self.mark_current(key.id())?;
        Ok(key)
    }

    /// Look up a loaded key by id
    pub fn resolve(&self, id: &str) -> Result<Arc<Key>> {
        self.keys.get(id).cloned().ok_or_else(|| {
            warn!(key_id = id, "key id has not been loaded");
            CoreError::UnknownKey { id: id.to_owned() }
        })
    }

    /// Designate a loaded key for all future encryptions.
    ///
    /// Keys previously current stay loaded, so their envelopes still decrypt.
    pub fn mark_current(&mut self, id: &str) -> Result<Arc<Key>> {
        let key = self.resolve(id)?;
        debug!(key_id = id, "marked key current");
        self.current = Some(id.to_owned());
        Ok(key)
    }

    /// The key used for new encryptions
    pub fn current_key(&self) -> Result<Arc<Key>> {
        let id = self.current.as_deref().ok_or(CoreError::NoCurrentKey)?;
        self.resolve(id)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Remove a non-current key. Envelopes sealed under it become undecryptable.
    pub fn retire(&mut self, id: &str) -> Result<Arc<Key>> {
        if self.current.as_deref() == Some(id) {
            return Err(CoreError::KeyInUse { id: id.to_owned() });
        }
        let key = self
            .keys
            .remove(id)
            .ok_or_else(|| CoreError::UnknownKey { id: id.to_owned() })?;
        info!(key_id = id, "retired key");
        Ok(key)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.keys.contains_key(id)
    }

    /// Loaded key ids, sorted
    pub fn key_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
