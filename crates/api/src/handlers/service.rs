use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use salonbook_core::{
    errors::BookingError,
    models::{
        appointment::DeleteResponse,
        service::{CreateServiceRequest, ListServicesResponse, SalonService, ServiceResponse, UpdateServiceRequest},
    },
    validation,
};
use salonbook_db::repositories::service;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AdminUser, error_handling::AppError},
    ApiState,
};

fn service_not_found(id: Uuid) -> BookingError {
    BookingError::NotFound(format!("Service with ID {} not found", id))
}

pub async fn list_services(State(state): State<Arc<ApiState>>) -> Result<Json<ListServicesResponse>, AppError> {
    let services = service::list_services(&state.db_pool).await?;

    Ok(Json(ListServicesResponse {
        success: true,
        data: services.into_iter().map(SalonService::from).collect(),
    }))
}

pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), AppError> {
    let new_service = validation::validate_new_service(&payload)?;
    let created = service::create_service(&state.db_pool, &new_service).await?;

    Ok((
        StatusCode::CREATED,
        Json(ServiceResponse {
            success: true,
            message: "Service created successfully".to_string(),
            data: created.into(),
        }),
    ))
}

pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<ServiceResponse>, AppError> {
    let changes = validation::validate_service_changes(&payload)?;

    if service::get_service_by_id(&state.db_pool, id).await?.is_none() {
        return Err(service_not_found(id).into());
    }
    let updated = service::update_service(&state.db_pool, id, &changes).await?;

    Ok(Json(ServiceResponse {
        success: true,
        message: "Service updated successfully".to_string(),
        data: updated.into(),
    }))
}

pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !service::delete_service(&state.db_pool, id).await? {
        return Err(service_not_found(id).into());
    }

    Ok(Json(DeleteResponse {
        success: true,
        message: "Service deleted successfully".to_string(),
    }))
}
