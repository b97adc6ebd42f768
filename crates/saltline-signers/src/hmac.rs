//! HMAC-SHA-2 signer plugin (HS256, HS384, HS512).

use hmac::{Hmac, Mac};
use serde_json::{Map, Value};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use saltline_jws::{b64, Signer};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

const ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// HMAC signer over symmetric `oct` keys.
///
/// The secret is the base64url-decoded `k` member and must be at least as
/// long as the hash output for the chosen algorithm (RFC 7518 §3.2).
pub struct HmacSigner;

fn secret(key: &Value) -> Option<Vec<u8>> {
    if key.get("kty").and_then(Value::as_str) != Some("oct") {
        return None;
    }
    let k = key.get("k").and_then(Value::as_str)?;
    b64::decode(k).ok()
}

fn min_secret_len(alg: &str) -> Option<usize> {
    match alg {
        "HS256" => Some(32),
        "HS384" => Some(48),
        "HS512" => Some(64),
        _ => None,
    }
}

fn tag(alg: &str, secret: &[u8], input: &[u8]) -> Option<Vec<u8>> {
    if secret.len() < min_secret_len(alg)? {
        return None;
    }
    match alg {
        "HS256" => {
            let mut mac = HmacSha256::new_from_slice(secret).ok()?;
            mac.update(input);
            Some(mac.finalize().into_bytes().to_vec())
        }
        "HS384" => {
            let mut mac = HmacSha384::new_from_slice(secret).ok()?;
            mac.update(input);
            Some(mac.finalize().into_bytes().to_vec())
        }
        "HS512" => {
            let mut mac = HmacSha512::new_from_slice(secret).ok()?;
            mac.update(input);
            Some(mac.finalize().into_bytes().to_vec())
        }
        _ => None,
    }
}

impl Signer for HmacSigner {
    fn algorithms(&self) -> &[&'static str] {
        &ALGORITHMS
    }

    fn suggest(&self, key: &Value) -> Option<String> {
        // Pick the strongest algorithm the secret can carry.
        let len = secret(key)?.len();
        if len >= 64 {
            Some("HS512".to_string())
        } else if len >= 48 {
            Some("HS384".to_string())
        } else if len >= 32 {
            Some("HS256".to_string())
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
        let Some(secret) = secret(key) else {
            return false;
        };
        let input = format!("{protected}.{payload}");
        match tag(alg, &secret, input.as_bytes()) {
            Some(tag) => {
                entry.insert("signature".to_string(), Value::String(b64::encode(tag)));
                true
            }
            None => false,
        }
    }

    fn verify(
        &self,
        entry: &Map<String, Value>,
        key: &Value,
        alg: &str,
        protected: &str,
        payload: &str,
    ) -> bool {
        let Some(secret) = secret(key) else {
            return false;
        };
        let Some(signature) = entry
            .get("signature")
            .and_then(Value::as_str)
            .and_then(|s| b64::decode(s).ok())
        else {
            return false;
        };
        let input = format!("{protected}.{payload}");
        match tag(alg, &secret, input.as_bytes()) {
            Some(expected) => bool::from(expected.as_slice().ct_eq(&signature)),
            None => false,
        }
    }
}
