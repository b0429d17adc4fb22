use chrono::{DateTime, Utc};
use eyre::Report;
use salonbook_core::models::{
    appointment::Appointment, employee::Employee, payment::Payment, service::SalonService,
    slot::BlockedSlot, user::User,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: Option<String>,
    pub staff_id: Option<Uuid>,
    pub slot_date: String,
    pub slot_time: String,
    pub service_ids: Vec<Uuid>,
    pub total_price: f64,
    pub status: String,
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = Report;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse()
            .map_err(|e| eyre::eyre!("appointment {} has a bad status: {}", row.id, e))?;

        Ok(Self {
            id: row.id,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            staff_id: row.staff_id,
            date: row.slot_date,
            time: row.slot_time,
            service_ids: row.service_ids,
            total_price: row.total_price,
            status,
            cancel_reason: row.cancel_reason,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBlockedSlot {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub slot_date: String,
    pub slot_time: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbBlockedSlot> for BlockedSlot {
    fn from(row: DbBlockedSlot) -> Self {
        Self {
            id: row.id,
            staff_id: row.staff_id,
            date: row.slot_date,
            time: row.slot_time,
            reason: row.reason,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbService> for SalonService {
    fn from(row: DbService) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            duration_minutes: row.duration_minutes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEmployee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbEmployee> for Employee {
    fn from(row: DbEmployee) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            specialty: row.specialty,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPayment {
    pub id: Uuid,
    pub appointment_id: Option<Uuid>,
    pub amount: f64,
    pub method: String,
    pub reference: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbPayment> for Payment {
    fn from(row: DbPayment) -> Self {
        Self {
            id: row.id,
            appointment_id: row.appointment_id,
            amount: row.amount,
            method: row.method,
            reference: row.reference,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
