use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers::user, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/user/signup", post(user::signup))
        .route("/api/user/signin", post(user::signin))
        .route("/api/users", get(user::list_users))
}
