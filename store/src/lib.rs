//! Abstract enrollment storage for the FACESEAL protocol.
//!
//! The orchestrators depend only on the [`EnrollmentStore`] trait: an opaque
//! key-value blob store keyed per local identity. Persistence encoding is a
//! backend detail, not a protocol contract. A file backend lives here; an
//! in-memory backend for tests lives in `faceseal-nullables`.

pub mod error;
pub mod file;

pub use error::StoreError;
pub use file::FileStore;

/// Blob storage for one enrollment set per identity.
///
/// `save` replaces any existing blob atomically — a reader never observes a
/// partial set.
pub trait EnrollmentStore: Send + Sync {
    /// Store `blob` for `identity`, replacing any previous blob.
    fn save(&self, identity: &str, blob: &[u8]) -> Result<(), StoreError>;

    /// Load the blob for `identity`, or `None` if nothing is enrolled.
    fn load(&self, identity: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Remove the blob for `identity`. Removing a missing blob is not an
    /// error.
    fn clear(&self, identity: &str) -> Result<(), StoreError>;
}
