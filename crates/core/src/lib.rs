//! # SalonBook Core
//!
//! Domain types and booking rules for the SalonBook backend.
//!
//! - **models**: records and request/response shapes shared by every crate
//! - **errors**: the error taxonomy surfaced to API callers
//! - **validation**: field-level checks for incoming requests
//! - **store**: persistence ports plus in-memory implementations
//! - **booking**: the slot conflict check and the appointment lifecycle

pub mod booking;
pub mod errors;
pub mod models;
pub mod store;
pub mod validation;
