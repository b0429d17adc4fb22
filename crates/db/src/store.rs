//! [`PgStore`] adapts the repository functions to the booking store traits.

use async_trait::async_trait;
use eyre::Result;
use salonbook_core::{
    models::{
        appointment::{Appointment, AppointmentChanges, NewAppointment},
        slot::{BlockedSlot, BlockedSlotFilter, NewBlockedSlot, SlotKey},
        user::{NewUser, User},
    },
    store::{AppointmentStore, SlotStore, UserStore},
};
use uuid::Uuid;

use crate::repositories::{appointment, blocked_slot, user};
use crate::DbPool;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotStore for PgStore {
    async fn find_blocked(&self, slot: SlotKey) -> Result<Option<BlockedSlot>> {
        let row = blocked_slot::find_blocked_slot(&self.pool, &slot).await?;
        Ok(row.map(BlockedSlot::from))
    }

    async fn insert_blocked(&self, slot: NewBlockedSlot) -> Result<BlockedSlot> {
        let row = blocked_slot::create_blocked_slot(&self.pool, &slot).await?;
        Ok(row.into())
    }

    async fn delete_blocked(&self, id: Uuid) -> Result<bool> {
        blocked_slot::delete_blocked_slot(&self.pool, id).await
    }

    async fn list_blocked(&self, filter: BlockedSlotFilter) -> Result<Vec<BlockedSlot>> {
        let rows = blocked_slot::list_blocked_slots(&self.pool, &filter).await?;
        Ok(rows.into_iter().map(BlockedSlot::from).collect())
    }
}

#[async_trait]
impl AppointmentStore for PgStore {
    async fn find_conflicting(&self, slot: SlotKey, exclude: Option<Uuid>) -> Result<Option<Appointment>> {
        appointment::find_conflicting_appointment(&self.pool, &slot, exclude)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>> {
        appointment::get_appointment_by_id(&self.pool, id)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn insert(&self, new_appointment: NewAppointment) -> Result<Appointment> {
        appointment::create_appointment(&self.pool, &new_appointment)
            .await?
            .try_into()
    }

    async fn update(&self, id: Uuid, changes: AppointmentChanges) -> Result<Option<Appointment>> {
        appointment::update_appointment(&self.pool, id, &changes)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        appointment::list_appointments(&self.pool)
            .await?
            .into_iter()
            .map(Appointment::try_from)
            .collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        appointment::delete_appointment(&self.pool, id).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: String) -> Result<Option<User>> {
        let row = user::get_user_by_email(&self.pool, &email).await?;
        Ok(row.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let row = user::create_user(&self.pool, &new_user).await?;
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<User>> {
        let rows = user::list_users(&self.pool).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
