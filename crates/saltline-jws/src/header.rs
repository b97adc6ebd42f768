//! Protected/unprotected header merging.

use serde_json::{Map, Value};

use crate::b64;
use crate::error::JwsError;

/// Merges a signature entry's protected and unprotected headers into one
/// independently owned object.
///
/// The protected header (decoded from its base64url form, or taken as-is
/// while an entry is still under construction) seeds the result; keys from
/// the unprotected `header` are copied in only where missing. Protected
/// values are never overwritten — an unprotected header cannot shadow an
/// integrity-covered claim.
///
/// # Errors
///
/// Returns [`JwsError::MalformedHeader`] if a present `protected` value is
/// neither an object nor a base64url string decoding to one, or if a
/// present `header` value is not an object.
pub fn merge_header(entry: &Map<String, Value>) -> Result<Map<String, Value>, JwsError> {
    let mut merged = match entry.get("protected") {
        None => Map::new(),
        Some(Value::Object(protected)) => protected.clone(),
        Some(Value::String(text)) => match b64::decode_json(text)? {
            Value::Object(protected) => protected,
            _ => {
                return Err(JwsError::MalformedHeader(
                    "protected header is not a JSON object".to_string(),
                ))
            }
        },
        Some(_) => {
            return Err(JwsError::MalformedHeader(
                "protected header is neither an object nor a string".to_string(),
            ))
        }
    };

    match entry.get("header") {
        None => {}
        Some(Value::Object(unprotected)) => {
            for (name, value) in unprotected {
                merged
                    .entry(name.clone())
                    .or_insert_with(|| value.clone());
            }
        }
        Some(_) => {
            return Err(JwsError::MalformedHeader(
                "unprotected header is not a JSON object".to_string(),
            ))
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::merge_header;
    use crate::b64;

    fn entry(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test entries are objects"),
        }
    }

    #[test]
    fn protected_wins_on_every_overlapping_key() {
        let protected = b64::encode_json(&json!({"alg": "HS256", "kid": "prot"})).unwrap();
        let sig = entry(json!({
            "protected": protected,
            "header": {"alg": "none", "kid": "unprot", "extra": true},
        }));

        let merged = merge_header(&sig).unwrap();
        assert_eq!(merged["alg"], json!("HS256"));
        assert_eq!(merged["kid"], json!("prot"));
        assert_eq!(merged["extra"], json!(true));
    }

    #[test]
    fn absent_protected_yields_unprotected_only() {
        let sig = entry(json!({"header": {"kid": "k1"}}));
        let merged = merge_header(&sig).unwrap();
        assert_eq!(merged["kid"], json!("k1"));
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn raw_object_protected_is_accepted_during_construction() {
        let sig = entry(json!({"protected": {"alg": "HS256"}}));
        let merged = merge_header(&sig).unwrap();
        assert_eq!(merged["alg"], json!("HS256"));
    }

    #[test]
    fn non_object_protected_is_malformed() {
        // base64url of a JSON string, not an object
        let sig = entry(json!({"protected": b64::encode("\"alg\"")}));
        assert!(merge_header(&sig).is_err());

        let sig = entry(json!({"protected": 42}));
        assert!(merge_header(&sig).is_err());
    }

    #[test]
    fn result_does_not_alias_the_entry() {
        let sig = entry(json!({"header": {"kid": "k1"}}));
        let mut merged = merge_header(&sig).unwrap();
        merged.insert("kid".to_string(), json!("changed"));
        assert_eq!(sig["header"]["kid"], json!("k1"));
    }
}
