//! Conversion between the compact and JSON serializations.

use serde_json::{Map, Value};

use crate::error::JwsError;

/// Parses a compact serialization into a flattened-form document.
///
/// The input must contain exactly two `.` separators; each of the three
/// segments may be empty. Segments are stored verbatim — no base64url
/// decoding happens here.
///
/// # Example
///
/// ```rust
/// let doc = saltline_jws::from_compact("eyJhbGciOiJIUzI1NiJ9.aGVsbG8.c2ln")?;
/// assert_eq!(doc["payload"], "aGVsbG8");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn from_compact(text: &str) -> Result<Map<String, Value>, JwsError> {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != 3 {
        return Err(JwsError::MalformedCompact(segments.len()));
    }

    let mut doc = Map::new();
    doc.insert(
        "protected".to_string(),
        Value::String(segments[0].to_string()),
    );
    doc.insert(
        "payload".to_string(),
        Value::String(segments[1].to_string()),
    );
    doc.insert(
        "signature".to_string(),
        Value::String(segments[2].to_string()),
    );
    Ok(doc)
}

/// Renders a single-signature document as its compact serialization.
///
/// Accepts either the flattened form or a `signatures` array of length
/// one. An absent protected header serializes as the empty first segment.
///
/// # Errors
///
/// - [`JwsError::AmbiguousFormat`] if the document carries zero or more
///   than one signature.
/// - [`JwsError::UnprotectedHeaderPresent`] if the signature carries an
///   unprotected `header` — compact form has no slot for it.
/// - [`JwsError::MissingPayload`] if `payload` is absent or non-string.
pub fn to_compact(doc: &Value) -> Result<String, JwsError> {
    let doc = doc.as_object().ok_or(JwsError::AmbiguousFormat)?;

    let payload = doc
        .get("payload")
        .and_then(Value::as_str)
        .ok_or(JwsError::MissingPayload)?;

    let entry: &Map<String, Value> = match doc.get("signatures") {
        Some(Value::Array(entries)) => {
            if entries.len() != 1 {
                return Err(JwsError::AmbiguousFormat);
            }
            entries[0].as_object().ok_or(JwsError::AmbiguousFormat)?
        }
        Some(_) => return Err(JwsError::AmbiguousFormat),
        None => doc,
    };

    if entry.contains_key("header") {
        return Err(JwsError::UnprotectedHeaderPresent);
    }

    let signature = entry
        .get("signature")
        .and_then(Value::as_str)
        .ok_or(JwsError::AmbiguousFormat)?;

    let protected = match entry.get("protected") {
        None => "",
        Some(Value::String(text)) => text.as_str(),
        Some(_) => {
            return Err(JwsError::MalformedHeader(
                "protected header is not in encoded form".to_string(),
            ))
        }
    };

    Ok(format!("{protected}.{payload}.{signature}"))
}
