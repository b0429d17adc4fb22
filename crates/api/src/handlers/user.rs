use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use salonbook_core::{
    errors::BookingError,
    models::user::{NewUser, SigninRequest, SignupRequest, UserResponse},
    store::DuplicateKey,
    validation,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{
        auth::{self, AdminUser},
        error_handling::AppError,
    },
    ApiState,
};

pub async fn signup(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let draft = validation::validate_signup(&payload)?;

    if state.users.find_by_email(draft.email.clone()).await?.is_some() {
        return Err(BookingError::AlreadyExists("User with this email already exists".to_string()).into());
    }

    let password_hash = auth::hash_password(&draft.password).map_err(|e| BookingError::Internal(e.into()))?;

    let user = state
        .users
        .insert(NewUser {
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            password_hash,
            created_at: Utc::now(),
        })
        .await
        .map_err(|e| {
            // A concurrent signup can win the race past the lookup above.
            if e.downcast_ref::<DuplicateKey>().is_some() {
                BookingError::AlreadyExists("User with this email already exists".to_string())
            } else {
                BookingError::Store(e)
            }
        })?;

    info!(user_id = %user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn signin(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = auth::authenticate(state.users.as_ref(), &payload.email, &payload.password).await?;
    Ok(Json(user.into()))
}

pub async fn list_users(
    State(state): State<Arc<ApiState>>,
    _admin: AdminUser,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
