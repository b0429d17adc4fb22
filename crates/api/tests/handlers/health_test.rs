use serde_json::Value;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_ping() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/api/ping").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Backend Running");
}

#[tokio::test]
async fn test_health_and_version() {
    let ctx = TestContext::new().await;

    let health = ctx.server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "ok");

    let version = ctx.server.get("/version").await.json::<Value>();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}
