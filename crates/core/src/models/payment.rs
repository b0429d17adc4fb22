use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub appointment_id: Option<Uuid>,
    pub amount: f64,
    pub method: String,
    pub reference: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub appointment_id: Option<Uuid>,
    pub amount: Option<f64>,
    pub method: Option<String>,
    pub reference: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    pub payment_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub appointment_id: Option<Uuid>,
    pub amount: f64,
    pub method: String,
    pub reference: Option<String>,
    pub status: String,
}
