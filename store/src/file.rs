//! File-backed enrollment store — one blob file per identity.
//!
//! Writes go through a temporary file in the same directory followed by an
//! atomic rename, so a crash mid-save leaves either the old blob or the new
//! one, never a torn mix.

use crate::error::StoreError;
use crate::EnrollmentStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Stores each identity's enrollment blob as `<hex(identity)>.json` under a
/// root directory. Hex-encoding the identity keeps arbitrary identity
/// strings out of the filesystem namespace.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, identity: &str) -> PathBuf {
        self.root.join(format!("{}.json", hex::encode(identity)))
    }
}

impl EnrollmentStore for FileStore {
    fn save(&self, identity: &str, blob: &[u8]) -> Result<(), StoreError> {
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        tmp.write_all(blob)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        tmp.persist(self.path_for(identity))
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn load(&self, identity: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(identity)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn clear(&self, identity: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(identity)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }
}
