//! Employees and payments; both are administrative only.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{
    handlers::{employee, payment},
    ApiState,
};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/employees",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route(
            "/api/payments",
            get(payment::list_payments).post(payment::create_payment),
        )
}
