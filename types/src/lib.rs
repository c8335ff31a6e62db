//! Shared value types for the FACESEAL protocol.
//!
//! - `BitVec` — the bit-string currency of the quantizer, codec and extractor
//! - `EnrollmentRecord` / `EnrollmentSet` — the persisted enrollment artifacts
//! - `ProtocolParams` / `BchParams` — configuration fixed at construction
//! - `Timestamp` — Unix-seconds wall clock

pub mod bits;
pub mod error;
pub mod params;
pub mod record;
pub mod time;

pub use bits::BitVec;
pub use error::{BitsError, RecordError};
pub use params::{BchParams, ProtocolParams};
pub use record::{EnrollmentRecord, EnrollmentSet};
pub use time::Timestamp;
