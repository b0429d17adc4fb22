//! # Appointment Lifecycle
//!
//! [`BookingService`] owns the store handles and implements every operation
//! that creates or moves an appointment or changes the set of blocked slots.
//!
//! ## Transitions
//!
//! | Operation  | Guard                                   | Result        |
//! |------------|-----------------------------------------|---------------|
//! | create     | valid fields, slot free (if staffed)    | `Booked`      |
//! | cancel     | record exists                           | `Cancelled`   |
//! | reschedule | record exists, valid fields, slot free  | `Rescheduled` |
//!
//! Cancel and reschedule do not look at the current status, so a cancelled
//! appointment can be cancelled again or rescheduled back into a live state.
//!
//! ## Concurrency
//!
//! The conflict check and the write are separate store calls. Two requests
//! claiming the same slot at the same moment can both pass the check and both
//! write. [`BookingService::with_slot_locks`] serialises claims per slot
//! inside this process.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::conflict::check_slot_available;
use super::locks::{SlotGuard, SlotLocks};
use crate::errors::{BookingError, BookingResult};
use crate::models::{
    appointment::{Appointment, AppointmentChanges, CreateAppointmentRequest},
    slot::{BlockedSlot, BlockedSlotFilter, CreateBlockedSlotRequest, SlotKey},
};
use crate::store::{AppointmentStore, SlotStore};
use crate::validation;

#[derive(Clone)]
pub struct BookingService {
    appointments: Arc<dyn AppointmentStore>,
    slots: Arc<dyn SlotStore>,
    locks: Option<Arc<SlotLocks>>,
}

impl BookingService {
    pub fn new(appointments: Arc<dyn AppointmentStore>, slots: Arc<dyn SlotStore>) -> Self {
        Self {
            appointments,
            slots,
            locks: None,
        }
    }

    /// Serialise claims on the same slot for the lifetime of this service.
    pub fn with_slot_locks(mut self) -> Self {
        self.locks = Some(Arc::new(SlotLocks::new()));
        self
    }

    pub fn serializes_slot_writes(&self) -> bool {
        self.locks.is_some()
    }

    async fn claim(&self, slot: &SlotKey) -> Option<SlotGuard> {
        match &self.locks {
            Some(locks) => Some(locks.acquire(slot).await),
            None => None,
        }
    }

    /// Checks `slot` against blocked slots and live appointments.
    pub async fn check_slot_available(&self, slot: &SlotKey, exclude: Option<Uuid>) -> BookingResult<()> {
        check_slot_available(self.appointments.as_ref(), self.slots.as_ref(), slot, exclude).await
    }

    pub async fn create_appointment(&self, request: &CreateAppointmentRequest) -> BookingResult<Appointment> {
        let new_appointment = validation::validate_new_appointment(request, Utc::now())?;

        let slot = new_appointment
            .staff_id
            .map(|staff_id| SlotKey::new(staff_id, new_appointment.date.clone(), new_appointment.time.clone()));

        let _guard = match &slot {
            Some(slot) => {
                let guard = self.claim(slot).await;
                if let Err(err) = self.check_slot_available(slot, None).await {
                    warn!(code = err.code(), "appointment creation rejected: {}", err);
                    return Err(err);
                }
                guard
            }
            None => None,
        };

        let appointment = self.appointments.insert(new_appointment).await?;
        info!(
            appointment_id = %appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            "appointment booked"
        );

        Ok(appointment)
    }

    pub async fn cancel_appointment(&self, id: Uuid, reason: Option<&str>) -> BookingResult<Appointment> {
        let existing = self.get_appointment(id).await?;
        if existing.status.is_terminal() {
            warn!(appointment_id = %id, "cancelling an appointment that is already cancelled");
        }

        let changes = AppointmentChanges::cancel(validation::optional(reason), Utc::now());
        let appointment = self
            .appointments
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(appointment_id = %id, "appointment cancelled");
        Ok(appointment)
    }

    pub async fn reschedule_appointment(
        &self,
        id: Uuid,
        date: Option<&str>,
        time: Option<&str>,
    ) -> BookingResult<Appointment> {
        let (date, time) = validation::validate_slot_fields(date, time)?;
        let existing = self.get_appointment(id).await?;
        if existing.status.is_terminal() {
            warn!(appointment_id = %id, "rescheduling a cancelled appointment");
        }

        let slot = existing
            .staff_id
            .map(|staff_id| SlotKey::new(staff_id, date.clone(), time.clone()));

        let _guard = match &slot {
            Some(slot) => {
                let guard = self.claim(slot).await;
                if let Err(err) = self.check_slot_available(slot, Some(id)).await {
                    warn!(appointment_id = %id, code = err.code(), "reschedule rejected: {}", err);
                    return Err(err);
                }
                guard
            }
            None => None,
        };

        let changes = AppointmentChanges::reschedule(date, time, Utc::now());
        let appointment = self
            .appointments
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(
            appointment_id = %id,
            date = %appointment.date,
            time = %appointment.time,
            "appointment rescheduled"
        );
        Ok(appointment)
    }

    pub async fn get_appointment(&self, id: Uuid) -> BookingResult<Appointment> {
        self.appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_appointments(&self) -> BookingResult<Vec<Appointment>> {
        Ok(self.appointments.list().await?)
    }

    /// Administrative hard delete, regardless of status.
    pub async fn delete_appointment(&self, id: Uuid) -> BookingResult<()> {
        if !self.appointments.delete(id).await? {
            return Err(not_found(id));
        }
        info!(appointment_id = %id, "appointment deleted");
        Ok(())
    }

    /// Marks a slot unavailable. A second record for the same slot is refused.
    pub async fn block_slot(&self, request: &CreateBlockedSlotRequest) -> BookingResult<BlockedSlot> {
        let new_slot = validation::validate_blocked_slot(request, Utc::now())?;

        if self.slots.find_blocked(new_slot.slot.clone()).await?.is_some() {
            return Err(BookingError::AlreadyExists(
                "Availability slot already exists for this date, time, and stylist.".to_string(),
            ));
        }

        let blocked = self.slots.insert_blocked(new_slot).await?;
        info!(
            blocked_slot_id = %blocked.id,
            staff_id = %blocked.staff_id,
            date = %blocked.date,
            time = %blocked.time,
            "slot blocked"
        );
        Ok(blocked)
    }

    pub async fn unblock_slot(&self, id: Uuid) -> BookingResult<()> {
        if !self.slots.delete_blocked(id).await? {
            return Err(BookingError::NotFound(format!(
                "Availability slot with ID {} not found",
                id
            )));
        }
        info!(blocked_slot_id = %id, "slot unblocked");
        Ok(())
    }

    pub async fn list_blocked_slots(&self, filter: BlockedSlotFilter) -> BookingResult<Vec<BlockedSlot>> {
        Ok(self.slots.list_blocked(filter).await?)
    }
}

fn not_found(id: Uuid) -> BookingError {
    BookingError::NotFound(format!("Appointment with ID {} not found", id))
}
