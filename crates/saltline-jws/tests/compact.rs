use saltline_jws::{from_compact, to_compact, JwsError};
use serde_json::{json, Value};

#[test]
fn from_compact_splits_three_segments_verbatim() {
    let doc = from_compact("eyJhbGciOiJIUzI1NiJ9.aGVsbG8.c2ln").unwrap();
    assert_eq!(doc["protected"], "eyJhbGciOiJIUzI1NiJ9");
    assert_eq!(doc["payload"], "aGVsbG8");
    assert_eq!(doc["signature"], "c2ln");
}

#[test]
fn from_compact_allows_empty_segments() {
    let doc = from_compact("..").unwrap();
    assert_eq!(doc["protected"], "");
    assert_eq!(doc["payload"], "");
    assert_eq!(doc["signature"], "");
}

#[test]
fn from_compact_rejects_wrong_separator_count() {
    assert!(matches!(
        from_compact("a.b"),
        Err(JwsError::MalformedCompact(2))
    ));
    assert!(matches!(
        from_compact("a.b.c.d"),
        Err(JwsError::MalformedCompact(4))
    ));
    assert!(matches!(
        from_compact(""),
        Err(JwsError::MalformedCompact(1))
    ));
}

#[test]
fn round_trip_preserves_segments() {
    let text = "eyJhbGciOiJIUzI1NiJ9.aGVsbG8.c2ln";
    let doc = from_compact(text).unwrap();
    assert_eq!(to_compact(&Value::Object(doc)).unwrap(), text);
}

#[test]
fn to_compact_accepts_single_entry_general_form() {
    let doc = json!({
        "payload": "aGVsbG8",
        "signatures": [{"protected": "cHJvdA", "signature": "c2ln"}],
    });
    assert_eq!(to_compact(&doc).unwrap(), "cHJvdA.aGVsbG8.c2ln");
}

#[test]
fn to_compact_encodes_absent_protected_as_empty_segment() {
    let doc = json!({"payload": "aGVsbG8", "signature": "c2ln"});
    assert_eq!(to_compact(&doc).unwrap(), ".aGVsbG8.c2ln");
}

#[test]
fn to_compact_rejects_multiple_signatures() {
    let doc = json!({
        "payload": "aGVsbG8",
        "signatures": [
            {"protected": "cA", "signature": "c2ln"},
            {"protected": "cA", "signature": "c2ln"},
        ],
    });
    assert!(matches!(to_compact(&doc), Err(JwsError::AmbiguousFormat)));
}

#[test]
fn to_compact_rejects_zero_signatures() {
    let doc = json!({"payload": "aGVsbG8"});
    assert!(matches!(to_compact(&doc), Err(JwsError::AmbiguousFormat)));

    let doc = json!({"payload": "aGVsbG8", "signatures": []});
    assert!(matches!(to_compact(&doc), Err(JwsError::AmbiguousFormat)));
}

#[test]
fn to_compact_rejects_unprotected_header() {
    let doc = json!({
        "payload": "aGVsbG8",
        "signature": "c2ln",
        "header": {"kid": "k1"},
    });
    assert!(matches!(
        to_compact(&doc),
        Err(JwsError::UnprotectedHeaderPresent)
    ));

    let doc = json!({
        "payload": "aGVsbG8",
        "signatures": [{"signature": "c2ln", "header": {"kid": "k1"}}],
    });
    assert!(matches!(
        to_compact(&doc),
        Err(JwsError::UnprotectedHeaderPresent)
    ));
}

#[test]
fn to_compact_requires_string_payload() {
    let doc = json!({"signature": "c2ln"});
    assert!(matches!(to_compact(&doc), Err(JwsError::MissingPayload)));

    let doc = json!({"payload": 7, "signature": "c2ln"});
    assert!(matches!(to_compact(&doc), Err(JwsError::MissingPayload)));
}
