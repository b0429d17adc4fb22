//! # Authentication Module
//!
//! Password hashing with Argon2 and the [`AdminUser`] extractor guarding
//! administrative routes. Credentials arrive as HTTP Basic
//! (`Authorization: Basic base64(email:password)`) and are checked against
//! the user store.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use eyre::Result;
use salonbook_core::{errors::BookingError, models::user::User, store::UserStore, validation};
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

/// Hashes a password with a fresh random salt.
///
/// Returns the PHC string (algorithm, parameters, salt and hash).
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks `password` against a PHC string produced by [`hash_password`].
/// A malformed hash counts as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            warn!("Stored password hash could not be parsed: {}", e);
            false
        }
    }
}

fn invalid_credentials() -> BookingError {
    BookingError::Authentication("Invalid credentials".to_string())
}

/// Splits a `Basic` authorization header value into email and password.
pub fn parse_basic_credentials(header: &str) -> Result<(String, String), BookingError> {
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| BookingError::Authentication("Basic credentials required".to_string()))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| BookingError::Authentication("Malformed credentials".to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| BookingError::Authentication("Malformed credentials".to_string()))?;

    let (email, password) = decoded
        .split_once(':')
        .ok_or_else(|| BookingError::Authentication("Malformed credentials".to_string()))?;

    Ok((email.to_string(), password.to_string()))
}

/// Looks up `email` and verifies `password`. Unknown users and wrong
/// passwords produce the same error.
pub async fn authenticate(users: &dyn UserStore, email: &str, password: &str) -> Result<User, BookingError> {
    let email = validation::normalize_email(email).map_err(|_| invalid_credentials())?;

    let user = users
        .find_by_email(email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    Ok(user)
}

/// An authenticated caller. Declaring it as a handler argument makes the
/// route administrative.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<ApiState>) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| BookingError::Authentication("Authorization header required".to_string()))?;

        let (email, password) = parse_basic_credentials(header)?;
        let user = authenticate(state.users.as_ref(), &email, &password).await?;

        Ok(AdminUser(user))
    }
}
