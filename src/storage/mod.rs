//! Durable local key-value storage.
//!
//! The cache and the persisted onboarding form both write JSON blobs
//! under well-known string keys. `Storage` abstracts where those blobs
//! live so callers inject the backend once at construction:
//!
//! - `FileStorage`: one file per key under a cache directory
//! - `MemoryStorage`: in-memory map for tests and ephemeral sessions

pub mod local;

pub use local::FileStorage;

use std::collections::HashMap;

use anyhow::Result;

/// String-keyed blob storage with localStorage-shaped semantics:
/// reading a missing key is `Ok(None)`, writes replace wholesale.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-memory storage backend. Nothing survives the session.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
