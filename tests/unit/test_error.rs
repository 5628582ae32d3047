use concur_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication("transport failure: connection reset".to_string());
    assert_eq!(
        error.to_string(),
        "authentication error: transport failure: connection reset"
    );
}

#[test]
fn test_app_error_display_token_refresh() {
    let error = AppError::TokenRefresh("no refresh token available".to_string());
    assert_eq!(
        error.to_string(),
        "token refresh failed: no refresh token available"
    );
}

#[test]
fn test_app_error_display_request() {
    let error = AppError::Request {
        status: StatusCode::BAD_REQUEST,
        message: "Invalid report ID".to_string(),
    };
    let rendered = error.to_string();
    assert!(rendered.contains("400"));
    assert!(rendered.contains("Invalid report ID"));
}

#[test]
fn test_app_error_display_response_parse() {
    let error = AppError::ResponseParse("response body was empty".to_string());
    assert_eq!(
        error.to_string(),
        "response parse error: response body was empty"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("unknown resource kind: foo".to_string());
    assert_eq!(error.to_string(), "invalid input: unknown resource kind: foo");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_source_chain() {
    use std::error::Error;

    let io_error = std::io::Error::other("inner");
    let app_error: AppError = io_error.into();
    assert!(app_error.source().is_some());

    let plain = AppError::Authentication("no source".to_string());
    assert!(plain.source().is_none());
}
