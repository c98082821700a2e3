use super::*;
use base64::Engine as _;
use serde_json::json;

fn token(payload: &Value) -> String {
    encode_unsigned(payload)
}

#[test]
fn decode_claims_reads_payload_object() {
    let claims = decode_claims(&token(&json!({"sub": "7", "exp": 100}))).expect("claims");
    assert_eq!(claims.subject(), Some(&json!("7")));
    assert_eq!(claims.expiry(), Some(100));
}

#[test]
fn decode_claims_preserves_payload_order() {
    let claims = decode_claims(&token(&json!({"zeta": 1, "alpha": 2, "mid": 3}))).expect("claims");
    let keys: Vec<&str> = claims.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn decode_claims_tolerates_padded_payload() {
    let unpadded = token(&json!({"sub": "1"}));
    let mut parts: Vec<String> = unpadded.split('.').map(str::to_owned).collect();
    while parts[1].len() % 4 != 0 {
        parts[1].push('=');
    }
    let padded = parts.join(".");
    assert!(decode_claims(&padded).is_ok());
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    let err = decode_claims("only.two").expect_err("should fail");
    assert!(matches!(err, CodecError::Segments(2)));
    let err = decode_claims("").expect_err("should fail");
    assert!(matches!(err, CodecError::Segments(1)));
}

#[test]
fn decode_claims_rejects_bad_base64() {
    let err = decode_claims("a.!!!.c").expect_err("should fail");
    assert!(matches!(err, CodecError::Base64(_)));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let body = URL_SAFE_NO_PAD.encode("not json");
    let err = decode_claims(&format!("h.{body}.s")).expect_err("should fail");
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn decode_claims_rejects_non_object_payload() {
    let err = decode_claims(&token(&json!([1, 2, 3]))).expect_err("should fail");
    assert!(matches!(err, CodecError::NotAnObject));
}

#[test]
fn expiry_accepts_fractional_seconds() {
    let claims = decode_claims(&token(&json!({"exp": 1500.9}))).expect("claims");
    assert_eq!(claims.expiry(), Some(1500));
}

#[test]
fn expiry_ignores_non_numeric_values() {
    let claims = decode_claims(&token(&json!({"exp": "tomorrow"}))).expect("claims");
    assert_eq!(claims.expiry(), None);
}

#[test]
fn first_string_skips_non_string_values() {
    let claims = decode_claims(&token(&json!({"firstName": 5, "given_name": "Amal"}))).expect("claims");
    assert_eq!(claims.first_string(&["firstName", "first_name", "given_name"]), Some("Amal"));
}

#[test]
fn extract_bearer_returns_credential() {
    assert_eq!(extract_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
}

#[test]
fn extract_bearer_rejects_other_schemes_and_empty_tokens() {
    assert_eq!(extract_bearer("Basic dXNlcjpwYXNz"), None);
    assert_eq!(extract_bearer("Bearer "), None);
    assert_eq!(extract_bearer("bearer abc"), None);
}
