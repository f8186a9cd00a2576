use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::StateRepositoryTrait;
use crate::errors::Result;

/// Keeps state blobs in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStateRepository {
    blobs: Mutex<HashMap<String, String>>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with one blob.
    pub fn with_blob(storage_key: &str, blob: &str) -> Self {
        let repository = Self::new();
        repository
            .blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(storage_key.to_string(), blob.to_string());
        repository
    }
}

impl StateRepositoryTrait for InMemoryStateRepository {
    fn load_state(&self, storage_key: &str) -> Result<Option<String>> {
        Ok(self
            .blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(storage_key)
            .cloned())
    }

    fn save_state(&self, storage_key: &str, blob: &str) -> Result<()> {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(storage_key.to_string(), blob.to_string());
        Ok(())
    }

    fn delete_state(&self, storage_key: &str) -> Result<bool> {
        Ok(self
            .blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(storage_key)
            .is_some())
    }
}
