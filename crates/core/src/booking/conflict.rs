use tracing::debug;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::slot::SlotKey;
use crate::store::{AppointmentStore, SlotStore};

/// Decides whether `slot` can take an appointment.
///
/// Blocked slots are checked first, then live appointments other than
/// `exclude`. The first hit wins: `SlotBlocked` or `SlotTaken`. A store
/// failure comes back as `BookingError::Store`. Nothing is written.
pub async fn check_slot_available(
    appointments: &dyn AppointmentStore,
    slots: &dyn SlotStore,
    slot: &SlotKey,
    exclude: Option<Uuid>,
) -> BookingResult<()> {
    if let Some(blocked) = slots.find_blocked(slot.clone()).await? {
        debug!(
            staff_id = %slot.staff_id,
            date = %slot.date,
            time = %slot.time,
            blocked_slot_id = %blocked.id,
            "slot is blocked"
        );
        return Err(BookingError::SlotBlocked {
            staff_id: slot.staff_id,
            date: slot.date.clone(),
            time: slot.time.clone(),
        });
    }

    if let Some(existing) = appointments.find_conflicting(slot.clone(), exclude).await? {
        debug!(
            staff_id = %slot.staff_id,
            date = %slot.date,
            time = %slot.time,
            appointment_id = %existing.id,
            "slot is taken"
        );
        return Err(BookingError::SlotTaken {
            staff_id: slot.staff_id,
            date: slot.date.clone(),
            time: slot.time.clone(),
            appointment_id: existing.id,
        });
    }

    Ok(())
}
