//! JSON Web Signature (RFC 7515) protocol layer.
//!
//! This crate provides:
//! - Conversion between the compact and JSON serializations
//! - Protected/unprotected header merging with protected-priority semantics
//! - An append-only signer registry with first-registered-wins dispatch
//! - Sign and verify orchestration over pluggable per-algorithm signers
//!
//! Core invariants:
//! - A document carries exactly one payload, shared by every signature entry
//! - A protected header value is never shadowed by an unprotected one
//! - Signing either fully succeeds or leaves the document unchanged
//! - Verification failures fold into `false`; only structural faults are errors
//!
//! ## Quick Start
//!
//! ```rust
//! use saltline_jws::{from_compact, to_compact};
//! use serde_json::Value;
//!
//! let doc = from_compact("eyJhbGciOiJIUzI1NiJ9.aGVsbG8.c2ln")?;
//! assert_eq!(doc["payload"], "aGVsbG8");
//! assert_eq!(to_compact(&Value::Object(doc))?, "eyJhbGciOiJIUzI1NiJ9.aGVsbG8.c2ln");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Signing and verifying require a [`SignerRegistry`] populated with
//! [`Signer`] implementations; see the `saltline-signers` crate for the
//! HMAC and EdDSA plugins.
//!
#![deny(missing_docs)]

/// Base64url helpers for JWS segment values.
pub mod b64;
/// Conversion between compact and JSON serializations.
pub mod compact;
/// Error types for JWS operations.
pub mod error;
/// Protected/unprotected header merging.
pub mod header;
/// Sign orchestration.
pub mod sign;
/// Signer plugin interface and the algorithm registry.
pub mod signer;
/// Verify orchestration.
pub mod verify;

pub use compact::{from_compact, to_compact};
pub use error::JwsError;
pub use header::merge_header;
pub use sign::sign;
pub use signer::{Signer, SignerRegistry};
pub use verify::verify;
