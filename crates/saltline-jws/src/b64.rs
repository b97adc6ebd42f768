//! Base64url helpers for JWS segment values.
//!
//! All JWS segments use base64url without padding (RFC 7515 §2). The
//! protected-header encoding additionally serializes the header object as
//! canonical JSON (sorted keys, compact) so that re-encoding an unchanged
//! header is byte-stable.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;

use crate::error::JwsError;

/// Encodes bytes as base64url without padding.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes a base64url-no-pad string into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(text)
}

/// Serializes a JSON value canonically and encodes it as base64url.
pub fn encode_json(value: &Value) -> Result<String, JwsError> {
    let canonical = canonical_json::to_string(value)
        .map_err(|err| JwsError::MalformedHeader(err.to_string()))?;
    Ok(encode(canonical))
}

/// Decodes a base64url string and parses the result as JSON.
pub fn decode_json(text: &str) -> Result<Value, JwsError> {
    let bytes = decode(text).map_err(|err| JwsError::MalformedHeader(err.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|err| JwsError::MalformedHeader(err.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{decode_json, encode_json};

    #[test]
    fn embedded_json_round_trips() {
        let header = json!({"alg": "HS256", "typ": "JWT"});
        let encoded = encode_json(&header).unwrap();
        assert_eq!(decode_json(&encoded).unwrap(), header);
    }

    #[test]
    fn encoding_is_key_order_independent() {
        let a = encode_json(&json!({"alg": "HS256", "kid": "k1"})).unwrap();
        let b = encode_json(&json!({"kid": "k1", "alg": "HS256"})).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        assert!(decode_json("not base64!").is_err());
    }
}
