//! Signer plugin interface and the algorithm registry.

use serde_json::{Map, Value};

/// A pluggable signing/verification unit for one or more algorithms.
///
/// Implementations receive the exact byte-level inputs of RFC 7515: the
/// base64url protected-header segment and the base64url payload segment.
/// An absent protected header is passed as the empty string.
pub trait Signer: Send + Sync {
    /// Algorithm names this signer claims. Must be non-empty.
    fn algorithms(&self) -> &[&'static str];

    /// Suggests a default algorithm for the key, if this signer can
    /// handle the key at all.
    fn suggest(&self, key: &Value) -> Option<String>;

    /// Produces a signature over `protected "." payload` and writes it
    /// into `entry` under `signature` (base64url). Returns `false` on
    /// failure, leaving `entry` in an unspecified state the orchestrator
    /// discards.
    fn sign(
        &self,
        entry: &mut Map<String, Value>,
        key: &Value,
        alg: &str,
        protected: &str,
        payload: &str,
    ) -> bool;

    /// Checks `entry`'s `signature` against `protected "." payload`.
    /// Never mutates `entry`; all failure modes fold into `false`.
    fn verify(
        &self,
        entry: &Map<String, Value>,
        key: &Value,
        alg: &str,
        protected: &str,
        payload: &str,
    ) -> bool;
}

/// Append-only table of registered signers.
///
/// The registry is populated once at startup and read thereafter:
/// `register` takes `&mut self`, so every registration happens-before any
/// shared lookup by construction. A populated registry is `Sync` and may
/// be shared freely across concurrent sign/verify calls.
#[derive(Default)]
pub struct SignerRegistry {
    signers: Vec<Box<dyn Signer>>,
}

impl SignerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            signers: Vec::new(),
        }
    }

    /// Appends a signer. Registration order is significant: when two
    /// signers claim the same algorithm name, the first registered is
    /// authoritative.
    pub fn register(&mut self, signer: Box<dyn Signer>) {
        self.signers.push(signer);
    }

    /// Returns the first registered signer claiming `alg`, if any.
    pub fn find(&self, alg: &str) -> Option<&dyn Signer> {
        self.signers
            .iter()
            .find(|s| s.algorithms().iter().any(|a| *a == alg))
            .map(|s| s.as_ref())
    }

    /// Asks each signer, in registration order, to suggest a default
    /// algorithm for `key`; returns the first non-empty answer.
    pub fn suggest(&self, key: &Value) -> Option<String> {
        self.signers.iter().find_map(|s| s.suggest(key))
    }
}
