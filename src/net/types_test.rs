use super::*;

#[test]
fn registration_request_serializes_camel_case() {
    let req = RegistrationRequest {
        first_name: "Test_F".to_owned(),
        last_name: "Test_L".to_owned(),
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "firstName": "Test_F",
            "lastName": "Test_L",
            "email": "a@b.com",
            "password": "x",
        })
    );
}

#[test]
fn registration_response_reads_jwt() {
    let resp: RegistrationResponse = serde_json::from_str(r#"{"jwt":"abc123","id":7}"#).unwrap();
    assert_eq!(resp.token(), Some("abc123"));
}

#[test]
fn registration_response_without_jwt_has_no_token() {
    let resp: RegistrationResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
    assert_eq!(resp.token(), None);
    let resp: RegistrationResponse = serde_json::from_str(r#"{"jwt":""}"#).unwrap();
    assert_eq!(resp.token(), None);
}

#[test]
fn session_status_maps_codes() {
    assert_eq!(SessionStatus::from_status(200), Some(SessionStatus::Active));
    assert_eq!(SessionStatus::from_status(204), Some(SessionStatus::Active));
    assert_eq!(SessionStatus::from_status(401), Some(SessionStatus::Rejected));
    assert_eq!(SessionStatus::from_status(403), Some(SessionStatus::Rejected));
    assert_eq!(SessionStatus::from_status(500), None);
}
