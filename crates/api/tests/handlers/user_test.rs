use axum::http::StatusCode;
use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use pretty_assertions::assert_eq;
use salonbook_core::{
    models::user::UserResponse,
    store::{DuplicateKey, MockUserStore, UserStore},
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::test_utils::{admin_auth, basic_auth, server_with_users, TestContext, ADMIN_EMAIL};

fn signup_body(email: &str) -> Value {
    json!({
        "name": Name().fake::<String>(),
        "email": email,
        "password": "long enough password",
    })
}

#[tokio::test]
async fn test_signup_normalizes_email() {
    let ctx = TestContext::new().await;
    let email: String = SafeEmail().fake();

    let response = ctx
        .server
        .post("/api/user/signup")
        .json(&signup_body(&email.to_uppercase()))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["email"], email.to_lowercase());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());

    let stored = ctx
        .users
        .find_by_email(email.to_lowercase())
        .await
        .unwrap()
        .expect("user was stored");
    assert!(stored.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_duplicate_signup_is_conflict() {
    let ctx = TestContext::new().await;

    let response = ctx.server.post("/api/user/signup").json(&signup_body(ADMIN_EMAIL)).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_signup_losing_insert_race_is_conflict() {
    let mut users = MockUserStore::new();
    users.expect_find_by_email().times(1).returning(|_| Ok(None));
    users
        .expect_insert()
        .times(1)
        .returning(|user| Err(DuplicateKey(format!("email {}", user.email)).into()));
    let server = server_with_users(Arc::new(users));
    let email: String = SafeEmail().fake();

    let response = server.post("/api/user/signup").json(&signup_body(&email)).await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "ALREADY_EXISTS");
    assert_eq!(body["retryable"], false);
}

#[tokio::test]
async fn test_signup_store_outage_is_retryable() {
    let mut users = MockUserStore::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    users
        .expect_insert()
        .returning(|_| Err(eyre::eyre!("connection reset by peer")));
    let server = server_with_users(Arc::new(users));
    let email: String = SafeEmail().fake();

    let response = server.post("/api/user/signup").json(&signup_body(&email)).await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "STORE_ERROR");
    assert_eq!(body["retryable"], true);
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let ctx = TestContext::new().await;
    let email: String = SafeEmail().fake();

    let response = ctx
        .server
        .post("/api/user/signup")
        .json(&json!({ "name": "Lerato", "email": email, "password": "short" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_then_signin() {
    let ctx = TestContext::new().await;
    let email: String = SafeEmail().fake();
    ctx.server
        .post("/api/user/signup")
        .json(&signup_body(&email))
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .post("/api/user/signin")
        .json(&json!({ "email": email, "password": "long enough password" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<UserResponse>().email, email.to_lowercase());

    let response = ctx
        .server
        .post("/api/user/signin")
        .json(&json!({ "email": email, "password": "not the password" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signin_unknown_user() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/user/signin")
        .json(&json!({ "email": "nobody@salon.test", "password": "whatever123" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_is_admin_only() {
    let ctx = TestContext::new().await;

    ctx.server.get("/api/users").await.assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = admin_auth();
    let response = ctx.server.get("/api/users").add_header(name, value).await;
    response.assert_status_ok();
    let users = response.json::<Vec<UserResponse>>();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, ADMIN_EMAIL);
}

#[tokio::test]
async fn test_registered_user_passes_admin_gate() {
    let ctx = TestContext::new().await;
    let email: String = SafeEmail().fake();
    ctx.server
        .post("/api/user/signup")
        .json(&signup_body(&email))
        .await
        .assert_status(StatusCode::CREATED);

    ctx.server
        .get("/api/users")
        .add_header(
            axum::http::header::AUTHORIZATION,
            basic_auth(&email, "long enough password"),
        )
        .await
        .assert_status_ok();
}
