use thiserror::Error;

/// Errors surfaced by the JWS protocol layer.
///
/// These are deterministic, data-dependent failures; none is transient.
/// Cryptographic verification failures are never reported here: they fold
/// into a `false` result so a caller cannot distinguish *why* a signature
/// did not validate.
#[derive(Error, Debug)]
pub enum JwsError {
    /// Compact serialization does not split into exactly three segments.
    #[error("malformed compact serialization: expected 3 segments, found {0}")]
    MalformedCompact(usize),
    /// A protected header, template, or embedded header value is not the
    /// JSON object the protocol requires.
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    /// The document carries no string `payload` member.
    #[error("missing or non-string payload")]
    MissingPayload,
    /// Compact serialization requires exactly one signature.
    #[error("document does not carry exactly one signature")]
    AmbiguousFormat,
    /// Compact serialization has no slot for an unprotected header;
    /// dropping it silently would be a correctness hazard.
    #[error("unprotected header present; compact serialization would drop it")]
    UnprotectedHeaderPresent,
    /// The key's usage policy rejects the requested operation.
    #[error("key is not permitted to {op}")]
    KeyNotPermitted {
        /// Operation the key was asked to perform.
        op: &'static str,
    },
    /// The header-declared and key-declared algorithms disagree.
    #[error("algorithm mismatch: header declares {header:?}, key declares {key:?}")]
    AlgorithmMismatch {
        /// Algorithm declared by the headers.
        header: String,
        /// Algorithm declared by the key.
        key: String,
    },
    /// No signing algorithm could be determined from the headers, the key,
    /// or any registered signer's suggestion.
    #[error("no signing algorithm could be determined for this key")]
    NoAlgorithm,
    /// No registered signer claims the algorithm.
    #[error("no registered signer supports {0:?}")]
    UnsupportedAlgorithm(String),
    /// The signer reported failure while producing a signature.
    #[error("signing failed for algorithm {0:?}")]
    SigningFailed(String),
}
