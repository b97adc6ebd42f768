//! EdDSA (Ed25519) signer plugin.

use ed25519_dalek::{
    Signature, Signer as DalekSigner, SigningKey, Verifier as DalekVerifier, VerifyingKey,
};
use serde_json::{Map, Value};

use saltline_jws::{b64, Signer};

const ALGORITHMS: [&str; 1] = ["EdDSA"];

/// EdDSA signer over Ed25519 OKP keys (RFC 8037).
///
/// Signing requires the private scalar `d`; verification requires the
/// public point `x`. Both are base64url-encoded 32-byte values.
pub struct EdDsaSigner;

fn is_ed25519(key: &Value) -> bool {
    key.get("kty").and_then(Value::as_str) == Some("OKP")
        && key.get("crv").and_then(Value::as_str) == Some("Ed25519")
}

fn decode_scalar(key: &Value, member: &str) -> Option<[u8; 32]> {
    let bytes = key
        .get(member)
        .and_then(Value::as_str)
        .and_then(|text| b64::decode(text).ok())?;
    bytes.try_into().ok()
}

impl Signer for EdDsaSigner {
    fn algorithms(&self) -> &[&'static str] {
        &ALGORITHMS
    }

    fn suggest(&self, key: &Value) -> Option<String> {
        if is_ed25519(key) {
            Some("EdDSA".to_string())
        } else {
            None
        }
    }

    fn sign(
        &self,
        entry: &mut Map<String, Value>,
        key: &Value,
        alg: &str,
        protected: &str,
        payload: &str,
    ) -> bool {
        if alg != "EdDSA" || !is_ed25519(key) {
            return false;
        }
        let Some(seed) = decode_scalar(key, "d") else {
            return false;
        };
        let signing_key = SigningKey::from_bytes(&seed);
        let input = format!("{protected}.{payload}");
        let signature = signing_key.sign(input.as_bytes());
        entry.insert(
            "signature".to_string(),
            Value::String(b64::encode(signature.to_bytes())),
        );
        true
    }

    fn verify(
        &self,
        entry: &Map<String, Value>,
        key: &Value,
        alg: &str,
        protected: &str,
        payload: &str,
    ) -> bool {
        if alg != "EdDSA" || !is_ed25519(key) {
            return false;
        }
        let Some(point) = decode_scalar(key, "x") else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&point) else {
            return false;
        };
        let Some(signature) = entry
            .get("signature")
            .and_then(Value::as_str)
            .and_then(|text| b64::decode(text).ok())
            .and_then(|bytes| Signature::from_slice(&bytes).ok())
        else {
            return false;
        };
        let input = format!("{protected}.{payload}");
        verifying_key.verify(input.as_bytes(), &signature).is_ok()
    }
}
