//! Persistence ports.
//!
//! The booking rules only ever talk to these traits. The PostgreSQL
//! implementation lives in `salonbook-db`; [`memory`] holds in-process
//! implementations, and `mockall` generates `Mock*` doubles for each trait.

pub mod memory;

use async_trait::async_trait;
use eyre::Result;
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    appointment::{Appointment, AppointmentChanges, NewAppointment},
    slot::{BlockedSlot, BlockedSlotFilter, NewBlockedSlot, SlotKey},
    user::{NewUser, User},
};

/// A write hit a uniqueness constraint. Stores return it inside the
/// `eyre::Report` so callers can tell it apart from an outage.
#[derive(Debug, Error)]
#[error("duplicate key: {0}")]
pub struct DuplicateKey(pub String);

#[automock]
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Exact (staff, date, time) match.
    async fn find_blocked(&self, slot: SlotKey) -> Result<Option<BlockedSlot>>;

    async fn insert_blocked(&self, slot: NewBlockedSlot) -> Result<BlockedSlot>;

    /// Returns false when no record had that id.
    async fn delete_blocked(&self, id: Uuid) -> Result<bool>;

    async fn list_blocked(&self, filter: BlockedSlotFilter) -> Result<Vec<BlockedSlot>>;
}

#[automock]
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Finds an appointment in `slot` whose status is not cancelled, skipping
    /// `exclude` when given.
    async fn find_conflicting(
        &self,
        slot: SlotKey,
        exclude: Option<Uuid>,
    ) -> Result<Option<Appointment>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>>;

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment>;

    /// Returns `None` when no record had that id.
    async fn update(&self, id: Uuid, changes: AppointmentChanges) -> Result<Option<Appointment>>;

    /// All appointments ordered by date then time label.
    async fn list(&self) -> Result<Vec<Appointment>>;

    async fn delete(&self, id: Uuid) -> Result<bool>;
}

#[automock]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: String) -> Result<Option<User>>;

    /// Fails with [`DuplicateKey`] when the email is already registered.
    async fn insert(&self, user: NewUser) -> Result<User>;

    async fn list(&self) -> Result<Vec<User>>;
}
