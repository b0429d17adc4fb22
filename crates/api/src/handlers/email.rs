use axum::{extract::State, Json};
use salonbook_core::{
    models::email::{SendConfirmationEmailRequest, SendConfirmationEmailResponse},
    validation,
};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

pub async fn send_confirmation_email(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SendConfirmationEmailRequest>,
) -> Result<Json<SendConfirmationEmailResponse>, AppError> {
    let email = validation::validate_confirmation_email(&payload)?;
    let sent = salonbook_mailer::send_confirmation(state.mailer.as_ref(), &state.salon, &email).await?;

    Ok(Json(SendConfirmationEmailResponse {
        success: true,
        message: "Email sent".to_string(),
        message_id: sent.message_id,
    }))
}
