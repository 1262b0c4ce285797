use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let url = endpoint("/auth/login");
    assert!(url.ends_with("/auth/login"));
    assert!(url.starts_with(config::api_base_url()));
    assert!(!url.contains("//auth"));
}

#[test]
fn token_query_endpoint_carries_token() {
    assert!(token_query_endpoint("/auth/me", "tok123").ends_with("/auth/me?token=tok123"));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}

#[test]
fn status_error_prefers_backend_detail() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"Incorrect email or password"}"#).unwrap();
    let err = status_error(401, Some(&body), LOGIN_FAILED);
    assert_eq!(err, ApiError::Status { status: 401, detail: "Incorrect email or password".to_owned() });
    assert_eq!(err.to_string(), "Incorrect email or password");
}

#[test]
fn status_error_falls_back_without_body() {
    let err = status_error(500, None, REGISTRATION_FAILED);
    assert_eq!(err.to_string(), "Registration failed");
}

#[test]
fn status_error_falls_back_on_empty_detail() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    let err = status_error(401, Some(&body), CURRENT_USER_FAILED);
    assert_eq!(err, ApiError::Status { status: 401, detail: "Failed to get user info".to_owned() });
}

#[test]
fn unavailable_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
