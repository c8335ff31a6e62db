//! Enrollment artifacts — the only data the protocol ever persists.
//!
//! A record stores helper data and hashes, never biometric bits and never
//! the fuzzy-extractor secret itself.

use crate::bits::BitVec;
use crate::error::RecordError;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One enrolled frame: helper data plus the key-binding chain values.
///
/// Immutable after creation. The fields `secret_hash`, `salt`,
/// `session_key_xor_hash` and `token` are lowercase hex strings of 32-byte
/// values; `helper` has the codec's codeword length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Position of this record within its set (0-based).
    pub index: u32,
    /// Code-offset helper data: `codeword XOR aligned biometric bits`.
    pub helper: BitVec,
    /// SHA-256 of the bit string of the per-frame random secret.
    pub secret_hash: String,
    /// Per-enrollment salt, shared by every record in the set.
    pub salt: String,
    /// `hex_xor(hex_xor(secret_hash, salt), session_key)` — masks the
    /// session key without persisting it.
    pub session_key_xor_hash: String,
    /// `SHA-256(hex(session_key) ++ hex(secret_hash))`.
    pub token: String,
    /// When this record was created.
    pub timestamp: Timestamp,
}

/// A complete, validated enrollment: a fixed number of records sharing one
/// salt.
///
/// Construction is all-or-nothing — a partial set can never exist. The raw
/// records are what the store serializes; a loaded blob goes back through
/// [`EnrollmentSet::new`] so a corrupted or truncated blob is rejected
/// before any matching happens.
#[derive(Clone, Debug)]
pub struct EnrollmentSet {
    records: Vec<EnrollmentRecord>,
}

impl EnrollmentSet {
    /// Validate and wrap `records`: the count must equal `expected`, be
    /// non-zero, and all records must carry the same salt.
    pub fn new(records: Vec<EnrollmentRecord>, expected: usize) -> Result<Self, RecordError> {
        if records.len() != expected || records.is_empty() {
            return Err(RecordError::WrongRecordCount {
                expected,
                got: records.len(),
            });
        }
        let salt = &records[0].salt;
        for (index, record) in records.iter().enumerate() {
            if &record.salt != salt {
                return Err(RecordError::SaltMismatch { index });
            }
        }
        Ok(Self { records })
    }

    /// The records in storage order.
    pub fn records(&self) -> &[EnrollmentRecord] {
        &self.records
    }

    /// The salt shared by every record.
    pub fn salt(&self) -> &str {
        &self.records[0].salt
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unwrap into raw records for serialization.
    pub fn into_records(self) -> Vec<EnrollmentRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(index: u32, salt: &str) -> EnrollmentRecord {
        EnrollmentRecord {
            index,
            helper: BitVec::zeros(15),
            secret_hash: "aa".repeat(32),
            salt: salt.to_string(),
            session_key_xor_hash: "bb".repeat(32),
            token: "cc".repeat(32),
            timestamp: Timestamp::new(1_700_000_000),
        }
    }

    #[test]
    fn set_requires_exact_count() {
        let records: Vec<_> = (0..3).map(|i| test_record(i, "s1")).collect();
        let err = EnrollmentSet::new(records, 4).unwrap_err();
        assert_eq!(
            err,
            RecordError::WrongRecordCount {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn set_requires_uniform_salt() {
        let mut records: Vec<_> = (0..3).map(|i| test_record(i, "s1")).collect();
        records[2].salt = "s2".to_string();
        let err = EnrollmentSet::new(records, 3).unwrap_err();
        assert_eq!(err, RecordError::SaltMismatch { index: 2 });
    }

    #[test]
    fn valid_set_exposes_salt_and_order() {
        let records: Vec<_> = (0..3).map(|i| test_record(i, "s1")).collect();
        let set = EnrollmentSet::new(records, 3).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.salt(), "s1");
        assert_eq!(set.records()[1].index, 1);
    }

    #[test]
    fn record_json_roundtrip() {
        let record = test_record(7, "abcd");
        let json = serde_json::to_string(&record).unwrap();
        let back: EnrollmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
