//! Sign orchestration.

use serde_json::{Map, Value};

use crate::b64;
use crate::error::JwsError;
use crate::signer::SignerRegistry;

/// Signs the document's payload with `key`, appending a signature entry.
///
/// The optional `template` seeds the new entry (typically carrying a
/// `protected` and/or `header` to embed); it is deep-copied, never
/// mutated. The signing algorithm is resolved in precedence order:
/// protected `alg`, unprotected `alg`, the key's declared `alg`, then
/// each registered signer's suggestion. When the headers were silent, the
/// chosen algorithm is written into the protected header so the choice is
/// integrity-covered.
///
/// On success the document gains the entry — flattened while it holds a
/// single signature, promoted to a `signatures` array on the second. On
/// failure the document is untouched.
///
/// # Errors
///
/// - [`JwsError::KeyNotPermitted`] if the key may not sign.
/// - [`JwsError::MalformedHeader`] if the template or its protected
///   header is not a JSON object.
/// - [`JwsError::AlgorithmMismatch`] if the headers and the key declare
///   different algorithms.
/// - [`JwsError::NoAlgorithm`] if no algorithm could be resolved.
/// - [`JwsError::MissingPayload`] if the document has no string payload.
/// - [`JwsError::UnsupportedAlgorithm`] if no registered signer claims
///   the resolved algorithm.
/// - [`JwsError::SigningFailed`] if the signer reports failure.
pub fn sign(
    doc: &mut Map<String, Value>,
    key: &Value,
    registry: &SignerRegistry,
    template: Option<&Value>,
) -> Result<(), JwsError> {
    let mut entry: Map<String, Value> = match template {
        None => Map::new(),
        Some(Value::Object(template)) => template.clone(),
        Some(_) => {
            return Err(JwsError::MalformedHeader(
                "signature template is not a JSON object".to_string(),
            ))
        }
    };

    if !saltline_jwk::allowed(key, None, "sign") {
        return Err(JwsError::KeyNotPermitted { op: "sign" });
    }

    // The protected header is tracked in two forms: the verbatim encoded
    // text (kept only while it remains byte-faithful to pass through
    // unchanged) and the decoded object used for algorithm resolution.
    let mut protected_text: Option<String> = None;
    let mut protected_obj: Option<Map<String, Value>> = None;
    match entry.get("protected") {
        None => {}
        Some(Value::Object(protected)) => protected_obj = Some(protected.clone()),
        Some(Value::String(text)) => {
            match b64::decode_json(text)? {
                Value::Object(protected) => protected_obj = Some(protected),
                _ => {
                    return Err(JwsError::MalformedHeader(
                        "protected header is not a JSON object".to_string(),
                    ))
                }
            }
            protected_text = Some(text.clone());
        }
        Some(_) => {
            return Err(JwsError::MalformedHeader(
                "protected header is neither an object nor a string".to_string(),
            ))
        }
    }

    let key_alg = saltline_jwk::alg(key);

    let header_alg: Option<String> = protected_obj
        .as_ref()
        .and_then(|p| p.get("alg"))
        .and_then(Value::as_str)
        .or_else(|| {
            entry
                .get("header")
                .and_then(|h| h.get("alg"))
                .and_then(Value::as_str)
        })
        .map(str::to_string);

    let alg: String = match header_alg {
        Some(alg) => alg,
        None => {
            let chosen = key_alg
                .map(str::to_string)
                .or_else(|| registry.suggest(key))
                .ok_or(JwsError::NoAlgorithm)?;
            // The resolved algorithm becomes integrity-covered.
            protected_obj
                .get_or_insert_with(Map::new)
                .insert("alg".to_string(), Value::String(chosen.clone()));
            protected_text = None;
            chosen
        }
    };

    if let Some(key_alg) = key_alg {
        if alg != key_alg {
            return Err(JwsError::AlgorithmMismatch {
                header: alg,
                key: key_alg.to_string(),
            });
        }
    }

    let payload = doc
        .get("payload")
        .and_then(Value::as_str)
        .ok_or(JwsError::MissingPayload)?
        .to_string();

    let protected = match (protected_text, protected_obj) {
        // Still byte-faithful: pass the caller's encoding through verbatim.
        (Some(text), _) => text,
        (None, Some(protected)) => {
            let encoded = b64::encode_json(&Value::Object(protected))?;
            entry.insert("protected".to_string(), Value::String(encoded.clone()));
            encoded
        }
        (None, None) => String::new(),
    };

    let signer = registry
        .find(&alg)
        .ok_or_else(|| JwsError::UnsupportedAlgorithm(alg.clone()))?;

    if !signer.sign(&mut entry, key, &alg, &protected, &payload) {
        return Err(JwsError::SigningFailed(alg));
    }

    add_entry(doc, entry);
    Ok(())
}

/// Fields that belong to a signature entry rather than the document.
const ENTRY_FIELDS: [&str; 3] = ["signature", "protected", "header"];

/// Records a finished signature entry in the document.
///
/// A document with no signatures takes the entry's fields directly
/// (flattened form). A document already carrying one signature is
/// promoted to the `signatures`-array form; further entries append. The
/// document's `payload` is never touched.
fn add_entry(doc: &mut Map<String, Value>, entry: Map<String, Value>) {
    if let Some(Value::Array(entries)) = doc.get_mut("signatures") {
        entries.push(Value::Object(entry));
        return;
    }

    if ENTRY_FIELDS.iter().any(|field| doc.contains_key(*field)) {
        let mut first = Map::new();
        for field in ENTRY_FIELDS {
            if let Some(value) = doc.remove(field) {
                first.insert(field.to_string(), value);
            }
        }
        doc.insert(
            "signatures".to_string(),
            Value::Array(vec![Value::Object(first), Value::Object(entry)]),
        );
        return;
    }

    for (name, value) in entry {
        doc.insert(name, value);
    }
}
