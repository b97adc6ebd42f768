//! Key-facing queries used by JWS orchestration.
//!
//! Keys are opaque JSON objects (JWKs) to the protocol layer. This crate
//! exposes the two facts the orchestrators are allowed to observe:
//! - the key's declared `alg`, if any
//! - whether the key's usage policy (`use` / `key_ops`, RFC 7517 §4.2-4.3)
//!   permits a given operation
//!
#![deny(missing_docs)]

use serde_json::Value;

/// Returns the key's declared algorithm, if it carries one.
pub fn alg(key: &Value) -> Option<&str> {
    key.get("alg").and_then(Value::as_str)
}

/// Returns whether the key's usage policy permits `op`.
///
/// A key constrains usage only through what it declares:
/// - if `required_alg` is given and the key declares a different `alg`,
///   the operation is denied;
/// - if the key carries `key_ops`, the array must contain `op`;
/// - otherwise, if the key carries `use`, its value must equal the usage
///   class of `op` (`"sig"` for sign/verify, `"enc"` for the rest);
/// - a key with neither constraint permits every operation.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// let key = json!({"kty": "oct", "use": "sig"});
/// assert!(saltline_jwk::allowed(&key, None, "sign"));
/// assert!(!saltline_jwk::allowed(&key, None, "encrypt"));
/// ```
pub fn allowed(key: &Value, required_alg: Option<&str>, op: &str) -> bool {
    if let (Some(required), Some(declared)) = (required_alg, alg(key)) {
        if required != declared {
            return false;
        }
    }

    if let Some(ops) = key.get("key_ops") {
        return match ops.as_array() {
            Some(ops) => ops.iter().any(|v| v.as_str() == Some(op)),
            None => false,
        };
    }

    if let Some(usage) = key.get("use") {
        return usage.as_str() == Some(usage_class(op));
    }

    true
}

fn usage_class(op: &str) -> &'static str {
    match op {
        "sign" | "verify" => "sig",
        _ => "enc",
    }
}
