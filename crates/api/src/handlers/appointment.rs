use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use salonbook_core::{
    errors::BookingError,
    models::appointment::{
        Appointment, CancelAppointmentRequest, CreateAppointmentRequest, CreateAppointmentResponse,
        DeleteResponse, ListAppointmentsResponse, RescheduleAppointmentRequest,
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AdminUser, error_handling::AppError},
    ApiState,
};

pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<CreateAppointmentResponse>), AppError> {
    let appointment = state.bookings.create_appointment(&payload).await?;

    let response = CreateAppointmentResponse {
        message: "Appointment created successfully".to_string(),
        appointment_id: appointment.id,
        data: appointment,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListAppointmentsResponse>, AppError> {
    let appointments = state.bookings.list_appointments().await?;

    Ok(Json(ListAppointmentsResponse {
        success: true,
        data: appointments,
    }))
}

pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    Ok(Json(state.bookings.get_appointment(id).await?))
}

pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<Appointment>, AppError> {
    let payload = parse_cancel_body(&body)?;
    let appointment = state
        .bookings
        .cancel_appointment(id, payload.reason.as_deref())
        .await?;

    Ok(Json(appointment))
}

/// An empty body cancels without a reason. Anything else must be a valid request.
fn parse_cancel_body(body: &[u8]) -> Result<CancelAppointmentRequest, BookingError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CancelAppointmentRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| BookingError::Validation(format!("Invalid request body: {}", e)))
}

pub async fn reschedule_appointment(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .bookings
        .reschedule_appointment(id, payload.date.as_deref(), payload.time.as_deref())
        .await?;

    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.bookings.delete_appointment(id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Appointment deleted successfully".to_string(),
    }))
}
