use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use salonbook_core::models::{
    appointment::DeleteResponse,
    slot::{BlockedSlotFilter, CreateBlockedSlotRequest, CreateBlockedSlotResponse, ListBlockedSlotsResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AdminUser, error_handling::AppError},
    ApiState,
};

pub async fn list_blocked_slots(
    State(state): State<Arc<ApiState>>,
    Query(filter): Query<BlockedSlotFilter>,
) -> Result<Json<ListBlockedSlotsResponse>, AppError> {
    let slots = state.bookings.list_blocked_slots(filter).await?;

    Ok(Json(ListBlockedSlotsResponse {
        success: true,
        count: slots.len(),
        data: slots,
    }))
}

pub async fn block_slot(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateBlockedSlotRequest>,
) -> Result<(StatusCode, Json<CreateBlockedSlotResponse>), AppError> {
    let slot = state.bookings.block_slot(&payload).await?;

    let response = CreateBlockedSlotResponse {
        success: true,
        message: "Availability slot created successfully".to_string(),
        slot_id: slot.id,
        data: slot,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn unblock_slot(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.bookings.unblock_slot(id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Availability slot deleted successfully".to_string(),
    }))
}
