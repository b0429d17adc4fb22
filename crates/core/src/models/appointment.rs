use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slot::SlotKey;
use crate::errors::BookingError;

/// Status of an appointment.
///
/// `Booked` is the initial state. Reschedule moves to `Rescheduled` (from
/// either live state), cancel moves to `Cancelled`. Nothing in the booking
/// service refuses a transition out of `Cancelled`; see
/// [`AppointmentStatus::is_terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Booked,
    Rescheduled,
    Cancelled,
}

impl AppointmentStatus {
    /// Returns the string representation used for persistence.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Rescheduled => "rescheduled",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the appointment still occupies its slot.
    pub const fn occupies_slot(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// `Cancelled` is terminal for the business, but cancel and reschedule are
    /// still accepted on a cancelled record. Callers wanting a strict state
    /// machine must check this themselves.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(Self::Booked),
            "rescheduled" => Ok(Self::Rescheduled),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(BookingError::Validation(format!(
                "Unknown appointment status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: Option<String>,
    /// `None` means the appointment is not assigned to a staff member yet.
    pub staff_id: Option<Uuid>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Slot label such as `09:00 am`, compared by string equality.
    pub time: String,
    pub service_ids: Vec<Uuid>,
    pub total_price: f64,
    pub status: AppointmentStatus,
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// The slot this appointment sits in, if it has a staff member.
    pub fn slot(&self) -> Option<SlotKey> {
        self.staff_id
            .map(|staff_id| SlotKey::new(staff_id, self.date.clone(), self.time.clone()))
    }
}

/// A validated appointment ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub customer_id: Uuid,
    pub customer_name: Option<String>,
    pub staff_id: Option<Uuid>,
    pub date: String,
    pub time: String,
    pub service_ids: Vec<Uuid>,
    pub total_price: f64,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Field changes applied by an update. `None` leaves the stored value alone.
///
/// `clear_cancel_reason` wipes any stored reason and wins over `cancel_reason`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentChanges {
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub cancel_reason: Option<String>,
    pub clear_cancel_reason: bool,
    pub updated_at: DateTime<Utc>,
}

impl AppointmentChanges {
    pub fn cancel(reason: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            date: None,
            time: None,
            status: Some(AppointmentStatus::Cancelled),
            cancel_reason: reason,
            clear_cancel_reason: false,
            updated_at: now,
        }
    }

    pub fn reschedule(date: String, time: String, now: DateTime<Utc>) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
            status: Some(AppointmentStatus::Rescheduled),
            cancel_reason: None,
            clear_cancel_reason: true,
            updated_at: now,
        }
    }

    /// Applies the changes to an in-memory record.
    pub fn apply_to(&self, appointment: &mut Appointment) {
        if let Some(date) = &self.date {
            appointment.date = date.clone();
        }
        if let Some(time) = &self.time {
            appointment.time = time.clone();
        }
        if let Some(status) = self.status {
            appointment.status = status;
        }
        if self.clear_cancel_reason {
            appointment.cancel_reason = None;
        } else if let Some(reason) = &self.cancel_reason {
            appointment.cancel_reason = Some(reason.clone());
        }
        appointment.updated_at = self.updated_at;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub customer_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub staff_id: Option<Uuid>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub service_ids: Vec<Uuid>,
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentResponse {
    pub message: String,
    pub appointment_id: Uuid,
    pub data: Appointment,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelAppointmentRequest {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAppointmentsResponse {
    pub success: bool,
    pub data: Vec<Appointment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
