use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers::availability, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability",
            get(availability::list_blocked_slots).post(availability::block_slot),
        )
        .route("/api/availability/:id", delete(availability::unblock_slot))
}
