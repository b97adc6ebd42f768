//! Signer plugins for the Saltline JWS core.
//!
//! Each plugin implements [`saltline_jws::Signer`] for one algorithm
//! family and is registered into a [`SignerRegistry`] at startup:
//! - [`HmacSigner`] — HS256 / HS384 / HS512 over symmetric `oct` keys
//! - [`EdDsaSigner`] — EdDSA over Ed25519 OKP keys
//!
//! ## Quick Start
//!
//! ```rust
//! use saltline_jws::{b64, sign, verify};
//! use serde_json::{json, Map, Value};
//!
//! let registry = saltline_signers::default_registry();
//! let key = json!({
//!     "kty": "oct",
//!     "alg": "HS256",
//!     "k": b64::encode(b"0123456789abcdef0123456789abcdef"),
//! });
//!
//! let mut doc = Map::new();
//! doc.insert("payload".to_string(), json!(b64::encode("hello")));
//! sign(&mut doc, &key, &registry, None)?;
//!
//! assert!(verify(&Value::Object(doc), &key, &registry)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// EdDSA (Ed25519) signer plugin.
pub mod eddsa;
/// HMAC (HS256/HS384/HS512) signer plugin.
pub mod hmac;

pub use self::eddsa::EdDsaSigner;
pub use self::hmac::HmacSigner;

use saltline_jws::SignerRegistry;

/// Builds a registry with every built-in signer registered, HMAC first.
pub fn default_registry() -> SignerRegistry {
    let mut registry = SignerRegistry::new();
    registry.register(Box::new(HmacSigner));
    registry.register(Box::new(EdDsaSigner));
    registry
}
