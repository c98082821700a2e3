use super::*;
use serde_json::json;

#[test]
fn credentials_serialize_as_login_body() {
    let body = serde_json::to_value(Credentials::new(" a@b.com ", " secret ")).expect("serialize");
    assert_eq!(body, json!({"email": "a@b.com", "password": " secret "}));
}

#[test]
fn registration_uses_camel_case_fields() {
    let registration = Registration {
        first_name: "Amal".to_owned(),
        last_name: "Bennani".to_owned(),
        email: "a@b.com".to_owned(),
        phone: "0600000000".to_owned(),
        country: "MA".to_owned(),
        password: "hunter22".to_owned(),
    };
    let body = serde_json::to_value(registration).expect("serialize");
    assert_eq!(body["firstName"], "Amal");
    assert_eq!(body["lastName"], "Bennani");
    assert_eq!(body["country"], "MA");
    assert!(body.get("first_name").is_none());
}

#[test]
fn reply_fields_are_optional() {
    let reply: AuthReply = serde_json::from_str(r#"{"message":"Utilisateur inscrit"}"#).expect("decode");
    assert_eq!(reply.message.as_deref(), Some("Utilisateur inscrit"));
    assert_eq!(reply.token, None);
}

#[test]
fn into_token_requires_a_token() {
    let reply = AuthReply { token: Some("a.b.c".to_owned()), ..AuthReply::default() };
    assert_eq!(reply.into_token(), Ok("a.b.c".to_owned()));
    assert_eq!(AuthReply::default().into_token(), Err(ApiError::MissingToken));
    let blank = AuthReply { token: Some("  ".to_owned()), ..AuthReply::default() };
    assert_eq!(blank.into_token(), Err(ApiError::MissingToken));
}
