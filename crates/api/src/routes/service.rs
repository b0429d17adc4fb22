use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers::service, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/services",
            get(service::list_services).post(service::create_service),
        )
        .route(
            "/api/services/:id",
            put(service::update_service).delete(service::delete_service),
        )
}
