use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers::email, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/send-confirmation-email",
        post(email::send_confirmation_email),
    )
}
