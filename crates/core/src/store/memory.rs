//! In-process stores backed by `tokio::sync::RwLock`.
//!
//! Same query semantics as the PostgreSQL stores, no durability. Used by the
//! test suites and handy for running the API without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use eyre::Result;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AppointmentStore, DuplicateKey, SlotStore, UserStore};
use crate::models::{
    appointment::{Appointment, AppointmentChanges, NewAppointment},
    slot::{BlockedSlot, BlockedSlotFilter, NewBlockedSlot, SlotKey},
    user::{NewUser, User},
};

#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<Uuid, BlockedSlot>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn find_blocked(&self, slot: SlotKey) -> Result<Option<BlockedSlot>> {
        let slots = self.slots.read().await;
        Ok(slots.values().find(|s| s.key() == slot).cloned())
    }

    async fn insert_blocked(&self, slot: NewBlockedSlot) -> Result<BlockedSlot> {
        let record = BlockedSlot {
            id: Uuid::new_v4(),
            staff_id: slot.slot.staff_id,
            date: slot.slot.date,
            time: slot.slot.time,
            reason: slot.reason,
            created_at: slot.created_at,
        };
        self.slots.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete_blocked(&self, id: Uuid) -> Result<bool> {
        Ok(self.slots.write().await.remove(&id).is_some())
    }

    async fn list_blocked(&self, filter: BlockedSlotFilter) -> Result<Vec<BlockedSlot>> {
        let slots = self.slots.read().await;
        let mut found: Vec<BlockedSlot> = slots.values().filter(|s| filter.matches(s)).cloned().collect();
        found.sort_by(|a, b| (&a.date, &a.time, a.created_at).cmp(&(&b.date, &b.time, b.created_at)));
        Ok(found)
    }
}

#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    appointments: RwLock<HashMap<Uuid, Appointment>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn find_conflicting(
        &self,
        slot: SlotKey,
        exclude: Option<Uuid>,
    ) -> Result<Option<Appointment>> {
        let appointments = self.appointments.read().await;
        Ok(appointments
            .values()
            .find(|a| {
                a.staff_id == Some(slot.staff_id)
                    && a.date == slot.date
                    && a.time == slot.time
                    && a.status.occupies_slot()
                    && Some(a.id) != exclude
            })
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>> {
        Ok(self.appointments.read().await.get(&id).cloned())
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment> {
        let record = Appointment {
            id: Uuid::new_v4(),
            customer_id: appointment.customer_id,
            customer_name: appointment.customer_name,
            staff_id: appointment.staff_id,
            date: appointment.date,
            time: appointment.time,
            service_ids: appointment.service_ids,
            total_price: appointment.total_price,
            status: appointment.status,
            cancel_reason: None,
            created_at: appointment.created_at,
            updated_at: appointment.created_at,
        };
        self.appointments.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, changes: AppointmentChanges) -> Result<Option<Appointment>> {
        let mut appointments = self.appointments.write().await;
        Ok(appointments.get_mut(&id).map(|appointment| {
            changes.apply_to(appointment);
            appointment.clone()
        }))
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        let appointments = self.appointments.read().await;
        let mut all: Vec<Appointment> = appointments.values().cloned().collect();
        all.sort_by(|a, b| (&a.date, &a.time, a.created_at).cmp(&(&b.date, &b.time, b.created_at)));
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.appointments.write().await.remove(&id).is_some())
    }
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: String) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(DuplicateKey(format!("email {}", user.email)).into());
        }
        let record = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        users.insert(record.email.clone(), record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }
}
