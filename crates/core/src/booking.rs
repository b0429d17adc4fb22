//! Booking rules: the slot conflict check and the appointment lifecycle.

pub mod conflict;
pub mod lifecycle;
pub mod locks;

pub use conflict::check_slot_available;
pub use lifecycle::BookingService;
pub use locks::SlotLocks;
