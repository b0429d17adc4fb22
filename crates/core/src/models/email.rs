use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendConfirmationEmailRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub stylist: Option<String>,
    pub total_price: Option<f64>,
    pub total_duration: Option<i32>,
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendConfirmationEmailResponse {
    pub success: bool,
    pub message: String,
    pub message_id: String,
}

/// Everything the confirmation template needs, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationEmail {
    pub customer_name: String,
    pub to: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub stylist: Option<String>,
    pub total_price: Option<f64>,
    pub total_duration: Option<i32>,
    pub contact_number: Option<String>,
}
