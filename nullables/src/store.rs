//! In-memory [`EnrollmentStore`] for tests.

use faceseal_store::{EnrollmentStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Keeps enrollment blobs in a map. Blobs do not survive the process.
#[derive(Default)]
pub struct NullStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identities currently enrolled.
    pub fn len(&self) -> usize {
        self.blobs.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnrollmentStore for NullStore {
    fn save(&self, identity: &str, blob: &[u8]) -> Result<(), StoreError> {
        self.blobs
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?
            .insert(identity.to_string(), blob.to_vec());
        Ok(())
    }

    fn load(&self, identity: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .blobs
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?
            .get(identity)
            .cloned())
    }

    fn clear(&self, identity: &str) -> Result<(), StoreError> {
        self.blobs
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?
            .remove(identity);
        Ok(())
    }
}
