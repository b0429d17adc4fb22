use axum::{extract::State, http::StatusCode, Json};
use salonbook_core::{
    errors::BookingError,
    models::employee::{CreateEmployeeRequest, CreateEmployeeResponse, Employee},
    validation,
};
use salonbook_db::repositories::employee;
use std::sync::Arc;

use crate::{
    middleware::{auth::AdminUser, error_handling::AppError},
    ApiState,
};

pub async fn list_employees(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = employee::list_employees(&state.db_pool).await?;
    Ok(Json(employees.into_iter().map(Employee::from).collect()))
}

pub async fn create_employee(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<CreateEmployeeResponse>), AppError> {
    let new_employee = validation::validate_new_employee(&payload)?;

    if employee::get_employee_by_email(&state.db_pool, &new_employee.email)
        .await?
        .is_some()
    {
        return Err(BookingError::AlreadyExists("Employee with this email already exists".to_string()).into());
    }

    let created = employee::create_employee(&state.db_pool, &new_employee).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateEmployeeResponse {
            employee_id: created.id,
        }),
    ))
}
