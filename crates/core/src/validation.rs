//! Request validation.
//!
//! Every function here turns a loosely-typed request into a value the rest of
//! the crate can trust, or fails with [`BookingError::Validation`]. None of
//! them touch a store.
//!
//! Dates and time labels are checked for shape only. They are kept exactly as
//! received because slot matching is plain string equality.

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    appointment::{AppointmentStatus, CreateAppointmentRequest, NewAppointment},
    email::{ConfirmationEmail, SendConfirmationEmailRequest},
    employee::{CreateEmployeeRequest, NewEmployee},
    payment::{CreatePaymentRequest, NewPayment},
    service::{CreateServiceRequest, NewService, ServiceChanges, UpdateServiceRequest},
    slot::{CreateBlockedSlotRequest, NewBlockedSlot, SlotKey},
    user::{SignupDraft, SignupRequest},
};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_PAYMENT_STATUS: &str = "completed";

/// Returns the trimmed value of a required text field.
pub fn required(value: Option<&str>, field: &str) -> BookingResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(BookingError::Validation(format!("Missing required field: {}", field))),
    }
}

/// Trims an optional text field, treating blank as absent.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accepts only zero-padded `YYYY-MM-DD` calendar dates, so that string order
/// is chronological order.
pub fn validate_date(date: &str) -> BookingResult<()> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| BookingError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date)))?;

    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(BookingError::Validation(format!(
            "Invalid date '{}', expected zero-padded YYYY-MM-DD",
            date
        )));
    }

    Ok(())
}

/// Accepts slot labels of the form `hh:mm am` / `hh:mm pm` (hour 01-12).
pub fn validate_time_label(time: &str) -> BookingResult<()> {
    let invalid = || {
        BookingError::Validation(format!(
            "Invalid time '{}', expected a slot label like '09:00 am'",
            time
        ))
    };

    let (clock, meridiem) = time.split_once(' ').ok_or_else(invalid)?;
    if meridiem != "am" && meridiem != "pm" {
        return Err(invalid());
    }

    let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u8 = hours.parse().map_err(|_| invalid())?;
    let minutes: u8 = minutes.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hours) || minutes > 59 {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a date and time label pair, returning owned copies.
pub fn validate_slot_fields(date: Option<&str>, time: Option<&str>) -> BookingResult<(String, String)> {
    let date = required(date, "date")?;
    let time = required(time, "time")?;
    validate_date(&date)?;
    validate_time_label(&time)?;
    Ok((date, time))
}

fn validate_amount(amount: f64, field: &str) -> BookingResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(BookingError::Validation(format!(
            "{} must be a non-negative amount",
            field
        )));
    }
    Ok(())
}

pub fn validate_new_appointment(
    request: &CreateAppointmentRequest,
    now: DateTime<Utc>,
) -> BookingResult<NewAppointment> {
    let customer_id = request
        .customer_id
        .ok_or_else(|| BookingError::Validation("Missing required field: customerId".to_string()))?;
    let (date, time) = validate_slot_fields(request.date.as_deref(), request.time.as_deref())?;

    if request.service_ids.is_empty() {
        return Err(BookingError::Validation(
            "At least one service must be selected".to_string(),
        ));
    }

    let total_price = request
        .total_price
        .ok_or_else(|| BookingError::Validation("Missing required field: totalPrice".to_string()))?;
    validate_amount(total_price, "totalPrice")?;

    Ok(NewAppointment {
        customer_id,
        customer_name: optional(request.customer_name.as_deref()),
        staff_id: request.staff_id,
        date,
        time,
        service_ids: request.service_ids.clone(),
        total_price,
        status: AppointmentStatus::Booked,
        created_at: now,
    })
}

pub fn validate_blocked_slot(
    request: &CreateBlockedSlotRequest,
    now: DateTime<Utc>,
) -> BookingResult<NewBlockedSlot> {
    let staff_id = request
        .staff_id
        .ok_or_else(|| BookingError::Validation("Missing required field: staffId".to_string()))?;
    let (date, time) = validate_slot_fields(request.date.as_deref(), request.time.as_deref())?;

    Ok(NewBlockedSlot {
        slot: SlotKey::new(staff_id, date, time),
        reason: optional(request.reason.as_deref()),
        created_at: now,
    })
}

fn validate_duration(minutes: i32) -> BookingResult<()> {
    if minutes <= 0 {
        return Err(BookingError::Validation(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}

fn validate_price(price: f64) -> BookingResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(BookingError::Validation("price must be greater than zero".to_string()));
    }
    Ok(())
}

pub fn validate_new_service(request: &CreateServiceRequest) -> BookingResult<NewService> {
    let name = required(request.name.as_deref(), "name")?;
    let price = request.price.ok_or_else(|| {
        BookingError::Validation("Missing required fields: name, price, duration (in minutes)".to_string())
    })?;
    let duration_minutes = request.resolved_duration().ok_or_else(|| {
        BookingError::Validation("Missing required fields: name, price, duration (in minutes)".to_string())
    })?;
    validate_price(price)?;
    validate_duration(duration_minutes)?;

    Ok(NewService {
        name,
        description: optional(request.description.as_deref()).unwrap_or_default(),
        price,
        duration_minutes,
    })
}

pub fn validate_service_changes(request: &UpdateServiceRequest) -> BookingResult<ServiceChanges> {
    let name = match request.name.as_deref() {
        Some(name) => Some(required(Some(name), "name")?),
        None => None,
    };
    if let Some(price) = request.price {
        validate_price(price)?;
    }
    let duration_minutes = request.resolved_duration();
    if let Some(minutes) = duration_minutes {
        validate_duration(minutes)?;
    }

    Ok(ServiceChanges {
        name,
        description: request.description.as_ref().map(|d| d.trim().to_string()),
        price: request.price,
        duration_minutes,
    })
}

/// Lowercases and checks the rough shape of an email address.
pub fn normalize_email(email: &str) -> BookingResult<String> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    };
    if !valid {
        return Err(BookingError::Validation(format!("Invalid email address: {}", email)));
    }
    Ok(email)
}

pub fn validate_signup(request: &SignupRequest) -> BookingResult<SignupDraft> {
    let name = required(request.name.as_deref(), "name")?;
    let email = normalize_email(&required(request.email.as_deref(), "email")?)?;
    let password = request
        .password
        .clone()
        .ok_or_else(|| BookingError::Validation("Missing required field: password".to_string()))?;
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(BookingError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(SignupDraft {
        name,
        email,
        phone: optional(request.phone.as_deref()),
        password,
    })
}

pub fn validate_new_employee(request: &CreateEmployeeRequest) -> BookingResult<NewEmployee> {
    Ok(NewEmployee {
        name: required(request.name.as_deref(), "name")?,
        email: normalize_email(&required(request.email.as_deref(), "email")?)?,
        phone: optional(request.phone.as_deref()),
        specialty: optional(request.specialty.as_deref()),
    })
}

pub fn validate_new_payment(request: &CreatePaymentRequest) -> BookingResult<NewPayment> {
    let amount = request
        .amount
        .ok_or_else(|| BookingError::Validation("Missing required field: amount".to_string()))?;
    validate_amount(amount, "amount")?;

    Ok(NewPayment {
        appointment_id: request.appointment_id,
        amount,
        method: required(request.method.as_deref(), "method")?,
        reference: optional(request.reference.as_deref()),
        status: optional(request.status.as_deref()).unwrap_or_else(|| DEFAULT_PAYMENT_STATUS.to_string()),
    })
}

pub fn validate_confirmation_email(
    request: &SendConfirmationEmailRequest,
) -> BookingResult<ConfirmationEmail> {
    let missing = || BookingError::Validation("Missing fields".to_string());
    let customer_name = required(request.name.as_deref(), "name").map_err(|_| missing())?;
    let to = required(request.email.as_deref(), "email").map_err(|_| missing())?;
    let service = required(request.service.as_deref(), "service").map_err(|_| missing())?;
    let date = required(request.date.as_deref(), "date").map_err(|_| missing())?;
    let time = required(request.time.as_deref(), "time").map_err(|_| missing())?;

    Ok(ConfirmationEmail {
        customer_name,
        to: normalize_email(&to)?,
        service,
        date,
        time,
        stylist: optional(request.stylist.as_deref()),
        total_price: request.total_price,
        total_duration: request.total_duration,
        contact_number: optional(request.contact_number.as_deref()),
    })
}
