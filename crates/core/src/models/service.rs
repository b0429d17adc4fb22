use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A treatment offered by the salon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonService {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. Older clients send `duration`, newer ones `durationMinutes`;
/// the latter wins when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
    pub duration_minutes: Option<i32>,
}

impl CreateServiceRequest {
    pub fn resolved_duration(&self) -> Option<i32> {
        self.duration_minutes.or(self.duration)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
    pub duration_minutes: Option<i32>,
}

impl UpdateServiceRequest {
    pub fn resolved_duration(&self) -> Option<i32> {
        self.duration_minutes.or(self.duration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub success: bool,
    pub message: String,
    pub data: SalonService,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListServicesResponse {
    pub success: bool,
    pub data: Vec<SalonService>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
}
