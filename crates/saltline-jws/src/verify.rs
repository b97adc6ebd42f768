//! Verify orchestration.

use serde_json::{Map, Value};

use crate::error::JwsError;
use crate::header::merge_header;
use crate::signer::SignerRegistry;

/// Returns whether at least one signature on the document validates
/// under `key`.
///
/// General-form documents are scanned in array order with short-circuit
/// on the first valid entry; anything else is treated as one flattened
/// entry. Per-entry faults — a malformed header, an algorithm mismatch,
/// an algorithm no registered signer claims, or a failed cryptographic
/// check — all fold into that entry counting as "not verified", so the
/// result reveals nothing about *why* verification failed.
///
/// # Errors
///
/// Only structural faults are errors: [`JwsError::KeyNotPermitted`] if
/// the key may not verify, [`JwsError::MissingPayload`] if the document
/// has no string payload.
pub fn verify(doc: &Value, key: &Value, registry: &SignerRegistry) -> Result<bool, JwsError> {
    if !saltline_jwk::allowed(key, None, "verify") {
        return Err(JwsError::KeyNotPermitted { op: "verify" });
    }

    let doc = doc.as_object().ok_or(JwsError::MissingPayload)?;
    let payload = doc
        .get("payload")
        .and_then(Value::as_str)
        .ok_or(JwsError::MissingPayload)?;

    if let Some(Value::Array(entries)) = doc.get("signatures") {
        if !entries.is_empty() {
            return Ok(entries.iter().any(|entry| match entry.as_object() {
                Some(entry) => verify_entry(payload, entry, key, registry),
                None => false,
            }));
        }
    }

    Ok(verify_entry(payload, doc, key, registry))
}

/// Checks a single signature entry, folding every failure into `false`.
fn verify_entry(
    payload: &str,
    entry: &Map<String, Value>,
    key: &Value,
    registry: &SignerRegistry,
) -> bool {
    // A finalized entry carries its protected header in encoded form; an
    // absent header passes the empty-string sentinel to the signer.
    let protected = match entry.get("protected") {
        None => "",
        Some(Value::String(text)) => text.as_str(),
        Some(_) => return false,
    };

    let merged = match merge_header(entry) {
        Ok(merged) => merged,
        Err(_) => return false,
    };

    let key_alg = saltline_jwk::alg(key);
    let alg = match (merged.get("alg").and_then(Value::as_str), key_alg) {
        (Some(header_alg), Some(key_alg)) if header_alg != key_alg => return false,
        (Some(header_alg), _) => header_alg,
        (None, Some(key_alg)) => key_alg,
        (None, None) => return false,
    };

    match registry.find(alg) {
        Some(signer) => signer.verify(entry, key, alg, protected, payload),
        None => false,
    }
}
