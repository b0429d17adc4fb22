use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use salonbook_api::{
    config::ApiConfig,
    middleware::{
        auth::{self, parse_basic_credentials},
        error_handling::{map_error, AppError},
    },
};
use salonbook_core::errors::BookingError;
use std::collections::HashMap;
use uuid::Uuid;

use crate::test_utils::basic_auth;

fn slot_taken() -> BookingError {
    BookingError::SlotTaken {
        staff_id: Uuid::new_v4(),
        date: "2024-06-01".to_string(),
        time: "10:00 am".to_string(),
        appointment_id: Uuid::new_v4(),
    }
}

#[rstest]
#[case(BookingError::Validation("bad date".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::NotFound("missing".to_string()), StatusCode::NOT_FOUND)]
#[case(slot_taken(), StatusCode::CONFLICT)]
#[case(BookingError::SlotBlocked { staff_id: Uuid::new_v4(), date: "2024-06-01".to_string(), time: "10:00 am".to_string() }, StatusCode::CONFLICT)]
#[case(BookingError::AlreadyExists("duplicate".to_string()), StatusCode::CONFLICT)]
#[case(BookingError::Authentication("no".to_string()), StatusCode::UNAUTHORIZED)]
#[case(BookingError::Store(eyre::eyre!("connection reset")), StatusCode::SERVICE_UNAVAILABLE)]
#[case(BookingError::Delivery("provider down".to_string()), StatusCode::BAD_GATEWAY)]
#[case(BookingError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    assert_eq!(AppError(error).status(), expected);
}

#[tokio::test]
async fn test_error_body() {
    let response = map_error(BookingError::Store(eyre::eyre!("connection reset")));
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["code"], "STORE_ERROR");
    assert_eq!(body["retryable"], true);
    assert!(body["error"].as_str().unwrap().contains("connection reset"));
}

#[test]
fn test_eyre_report_becomes_store_error() {
    let error: AppError = eyre::eyre!("pool timed out").into();
    assert!(matches!(error.0, BookingError::Store(_)));
}

#[test]
fn test_password_hash_round_trip() {
    let hash = auth::hash_password("correct horse battery").unwrap();

    assert!(hash.starts_with("$argon2"));
    assert!(auth::verify_password("correct horse battery", &hash));
    assert!(!auth::verify_password("wrong horse battery", &hash));
    assert!(!auth::verify_password("correct horse battery", "not a phc string"));
}

#[test]
fn test_parse_basic_credentials() {
    let header = basic_auth("admin@salon.test", "pass:with:colons");
    let (email, password) = parse_basic_credentials(header.to_str().unwrap()).unwrap();

    assert_eq!(email, "admin@salon.test");
    assert_eq!(password, "pass:with:colons");
}

#[rstest]
#[case("Bearer abc")]
#[case("Basic !!!not-base64")]
#[case("Basic bm9jb2xvbg==")]
fn test_reject_malformed_credentials(#[case] header: &str) {
    let err = parse_basic_credentials(header).unwrap_err();
    assert_eq!(err.code(), "AUTHENTICATION_ERROR");
}

fn config(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_config_defaults() {
    let config = config(&[("DATABASE_URL", "postgres://localhost/salon")]).unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3001");
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.cors_origins, None);
    assert!(!config.serialize_slot_writes);
}

#[test]
fn test_config_requires_database_url() {
    assert!(config(&[]).is_err());
}

#[test]
fn test_config_overrides() {
    let config = config(&[
        ("DATABASE_URL", "postgres://localhost/salon"),
        ("API_PORT", "8080"),
        ("API_CORS_ORIGINS", "http://localhost:5173, https://salon.test"),
        ("BOOKING_SERIALIZE_SLOT_WRITES", "true"),
    ])
    .unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.cors_origins,
        Some(vec!["http://localhost:5173".to_string(), "https://salon.test".to_string()])
    );
    assert!(config.serialize_slot_writes);
}

#[test]
fn test_config_rejects_bad_port() {
    assert!(config(&[("DATABASE_URL", "postgres://x"), ("API_PORT", "not-a-port")]).is_err());
}
