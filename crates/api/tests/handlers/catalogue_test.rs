//! Catalogue, staff and payment routes. The pool in these tests never
//! connects, so only requests rejected before reaching the database are
//! covered here.

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{admin_auth, TestContext};

#[rstest]
#[case::services("/api/services")]
#[case::employees("/api/employees")]
#[case::payments("/api/payments")]
#[tokio::test]
async fn test_create_requires_admin(#[case] path: &str) {
    let ctx = TestContext::new().await;

    ctx.server
        .post(path)
        .json(&json!({}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case::employees("/api/employees")]
#[case::payments("/api/payments")]
#[tokio::test]
async fn test_listing_requires_admin(#[case] path: &str) {
    let ctx = TestContext::new().await;
    ctx.server.get(path).await.assert_status(StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case::missing_duration(json!({ "name": "Gel manicure", "price": 280.0 }))]
#[case::zero_price(json!({ "name": "Gel manicure", "price": 0.0, "duration": 45 }))]
#[case::missing_name(json!({ "price": 280.0, "durationMinutes": 45 }))]
#[tokio::test]
async fn test_invalid_service(#[case] body: Value) {
    let ctx = TestContext::new().await;
    let (name, value) = admin_auth();

    let response = ctx.server.post("/api/services").add_header(name, value).json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_service_update() {
    let ctx = TestContext::new().await;
    let (name, value) = admin_auth();

    ctx.server
        .put(&format!("/api/services/{}", Uuid::new_v4()))
        .add_header(name, value)
        .json(&json!({ "durationMinutes": -5 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_employee_email() {
    let ctx = TestContext::new().await;
    let (name, value) = admin_auth();

    ctx.server
        .post("/api/employees")
        .add_header(name, value)
        .json(&json!({ "name": "Zanele", "email": "not-an-email" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[rstest]
#[case::missing_amount(json!({ "method": "card" }))]
#[case::negative_amount(json!({ "amount": -10.0, "method": "card" }))]
#[case::missing_method(json!({ "amount": 100.0 }))]
#[tokio::test]
async fn test_invalid_payment(#[case] body: Value) {
    let ctx = TestContext::new().await;
    let (name, value) = admin_auth();

    ctx.server
        .post("/api/payments")
        .add_header(name, value)
        .json(&body)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
