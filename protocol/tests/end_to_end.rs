//! End-to-end protocol runs with the shipped parameters: 80-frame
//! enrollment, 10-frame verification, majority threshold 5, BCH(511, 304).
//!
//! Synthetic captures are a fixed base vector plus noise small enough that
//! every frame quantizes identically; a different base stands in for an
//! impostor, whose quantization differs in roughly half the bits.

use faceseal_nullables::NullStore;
use faceseal_protocol::{FaceSeal, ProtocolError, SessionPhase};
use faceseal_store::FileStore;
use faceseal_types::{BchParams, ProtocolParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DISTANCES: usize = 316;

fn base_vector(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..DISTANCES).map(|_| rng.gen_range(0.0..100.0)).collect()
}

fn noisy_frames(base: &[f64], count: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            base.iter()
                .map(|&v| v + rng.gen_range(-1e-6..1e-6))
                .collect()
        })
        .collect()
}

fn protocol() -> FaceSeal<NullStore> {
    faceseal_utils::init_tracing();
    FaceSeal::new(
        ProtocolParams::faceseal_defaults(),
        BchParams::faceseal_defaults(),
        NullStore::new(),
    )
    .unwrap()
}

#[test]
fn genuine_user_passes() {
    let protocol = protocol();
    let base = base_vector(1);

    protocol
        .enroll("alice", &noisy_frames(&base, 80, 100))
        .unwrap();

    let outcome = protocol
        .verify("alice", &noisy_frames(&base, 10, 101))
        .unwrap();
    assert!(outcome.success);
    assert!(outcome.matched_frame_count >= 5);
    assert_eq!(outcome.frames_used, 10);
    assert_eq!(outcome.required_matches, 5);
    assert_eq!(outcome.frames.len(), 10);
    assert_eq!(outcome.phase, SessionPhase::Passed);
}

#[test]
fn impostor_fails() {
    let protocol = protocol();
    let base = base_vector(2);
    protocol
        .enroll("alice", &noisy_frames(&base, 80, 102))
        .unwrap();

    let impostor = base_vector(3);
    let outcome = protocol
        .verify("alice", &noisy_frames(&impostor, 10, 103))
        .unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.matched_frame_count, 0);
    assert_eq!(outcome.match_percentage, 0.0);
    assert_eq!(outcome.phase, SessionPhase::Failed);
}

#[test]
fn enrollment_is_all_or_nothing() {
    let protocol = protocol();
    let base = base_vector(4);

    let err = protocol
        .enroll("alice", &noisy_frames(&base, 79, 104))
        .unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::InsufficientFrames { needed: 80, got: 79 }
    ));

    // Nothing was stored.
    let err = protocol
        .verify("alice", &noisy_frames(&base, 10, 105))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::NoEnrollmentFound));
}

#[test]
fn re_enrollment_replaces_the_stored_set() {
    let protocol = protocol();
    let old_face = base_vector(5);
    let new_face = base_vector(6);

    protocol
        .enroll("alice", &noisy_frames(&old_face, 80, 106))
        .unwrap();
    protocol
        .enroll("alice", &noisy_frames(&new_face, 80, 107))
        .unwrap();

    let outcome = protocol
        .verify("alice", &noisy_frames(&old_face, 10, 108))
        .unwrap();
    assert!(!outcome.success);

    let outcome = protocol
        .verify("alice", &noisy_frames(&new_face, 10, 109))
        .unwrap();
    assert!(outcome.success);
}

#[test]
fn clearing_an_enrollment_forgets_the_identity() {
    let protocol = protocol();
    let base = base_vector(7);

    protocol
        .enroll("alice", &noisy_frames(&base, 80, 110))
        .unwrap();
    protocol.clear_enrollment("alice").unwrap();

    let err = protocol
        .verify("alice", &noisy_frames(&base, 10, 111))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::NoEnrollmentFound));
}

#[test]
fn verification_skips_invalid_frames() {
    let protocol = protocol();
    let base = base_vector(8);
    protocol
        .enroll("alice", &noisy_frames(&base, 80, 112))
        .unwrap();

    let mut batch = vec![vec![1.0; 10], vec![f64::INFINITY; DISTANCES]];
    batch.extend(noisy_frames(&base, 10, 113));
    let outcome = protocol.verify("alice", &batch).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.frames_used, 10);
}

#[test]
fn enrollment_survives_a_process_restart() {
    faceseal_utils::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let base = base_vector(9);

    let first = FaceSeal::new(
        ProtocolParams::faceseal_defaults(),
        BchParams::faceseal_defaults(),
        FileStore::new(dir.path()).unwrap(),
    )
    .unwrap();
    first
        .enroll("alice", &noisy_frames(&base, 80, 114))
        .unwrap();
    drop(first);

    let second = FaceSeal::new(
        ProtocolParams::faceseal_defaults(),
        BchParams::faceseal_defaults(),
        FileStore::new(dir.path()).unwrap(),
    )
    .unwrap();
    let outcome = second
        .verify("alice", &noisy_frames(&base, 10, 115))
        .unwrap();
    assert!(outcome.success);
}

#[test]
fn corrupted_blob_is_rejected_before_matching() {
    faceseal_utils::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let base = base_vector(10);

    let protocol = FaceSeal::new(
        ProtocolParams::faceseal_defaults(),
        BchParams::faceseal_defaults(),
        FileStore::new(dir.path()).unwrap(),
    )
    .unwrap();
    protocol
        .enroll("alice", &noisy_frames(&base, 80, 116))
        .unwrap();

    // Truncate the stored blob behind the protocol's back.
    let blob_path = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    std::fs::write(&blob_path, b"[]").unwrap();

    let err = protocol
        .verify("alice", &noisy_frames(&base, 10, 117))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::Record(_)));
}
