use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Slot {date} {time} is blocked for staff member {staff_id}")]
    SlotBlocked {
        staff_id: Uuid,
        date: String,
        time: String,
    },

    #[error("Slot {date} {time} is already taken for staff member {staff_id} by appointment {appointment_id}")]
    SlotTaken {
        staff_id: Uuid,
        date: String,
        time: String,
        appointment_id: Uuid,
    },

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Email delivery error: {0}")]
    Delivery(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Stable machine-readable code for this error, rendered to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::SlotBlocked { .. } => "SLOT_BLOCKED",
            Self::SlotTaken { .. } => "SLOT_TAKEN",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Authentication(_) => "AUTHENTICATION_ERROR",
            Self::Store(_) => "STORE_ERROR",
            Self::Delivery(_) => "DELIVERY_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Collaborator failures may succeed on a later attempt; business rejections won't.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Delivery(_))
    }

    /// True for the two rejections produced by the slot conflict check.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SlotBlocked { .. } | Self::SlotTaken { .. })
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
