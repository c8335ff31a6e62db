//! Binary BCH codec for the FACESEAL protocol.
//!
//! The fuzzy extractor consumes this crate as a black box: an owned
//! [`BchCodec`] handle with parameters fixed at construction, exposing
//! `encode` (data → parity) and `decode_and_correct` (noisy data + parity →
//! corrected data + error count). There is no global codec state — callers
//! construct the handle once and pass it by reference.

pub mod bch;
pub mod error;
mod gf;

pub use bch::{BchCodec, Decoded};
pub use error::CodecError;
