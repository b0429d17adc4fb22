use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers::appointment, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            get(appointment::list_appointments).post(appointment::create_appointment),
        )
        .route(
            "/api/appointments/:id",
            get(appointment::get_appointment).delete(appointment::delete_appointment),
        )
        .route("/api/appointments/:id/cancel", put(appointment::cancel_appointment))
        .route(
            "/api/appointments/:id/reschedule",
            put(appointment::reschedule_appointment),
        )
}
