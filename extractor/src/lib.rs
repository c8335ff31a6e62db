//! The FACESEAL extraction pipeline: distance quantization, the BCH
//! code-offset fuzzy extractor, and the key-binding chain.
//!
//! Data flow per frame: distance vector → quantized bits → `generate`
//! (enrollment: helper + secret hash) or `reproduce` (verification:
//! recovered hash + error count) → key-binding token.

pub mod error;
pub mod fuzzy;
pub mod keychain;
pub mod quantizer;

pub use error::ExtractorError;
pub use fuzzy::{generate, reproduce, GeneratedSecret, ReproducedSecret};
pub use keychain::{bind_frame, new_salt, recompute_token, FrameBinding};
pub use quantizer::quantize;
