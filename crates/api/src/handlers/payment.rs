use axum::{extract::State, http::StatusCode, Json};
use salonbook_core::{
    models::payment::{CreatePaymentRequest, CreatePaymentResponse, Payment},
    validation,
};
use salonbook_db::repositories::payment;
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{auth::AdminUser, error_handling::AppError},
    ApiState,
};

pub async fn list_payments(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = payment::list_payments(&state.db_pool).await?;
    Ok(Json(payments.into_iter().map(Payment::from).collect()))
}

pub async fn create_payment(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<CreatePaymentResponse>), AppError> {
    let new_payment = validation::validate_new_payment(&payload)?;
    let created = payment::create_payment(&state.db_pool, &new_payment).await?;

    info!(payment_id = %created.id, amount = created.amount, "payment recorded");
    Ok((
        StatusCode::CREATED,
        Json(CreatePaymentResponse {
            payment_id: created.id,
        }),
    ))
}
