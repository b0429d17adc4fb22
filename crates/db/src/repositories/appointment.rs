use crate::models::DbAppointment;
use eyre::Result;
use salonbook_core::models::{
    appointment::{AppointmentChanges, AppointmentStatus, NewAppointment},
    slot::SlotKey,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const COLUMNS: &str = "id, customer_id, customer_name, staff_id, slot_date, slot_time, \
                       service_ids, total_price, status, cancel_reason, created_at, updated_at";

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating appointment: id={}, staff_id={:?}, date={}, time={}",
        id, appointment.staff_id, appointment.date, appointment.time
    );

    let row = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        INSERT INTO appointments (id, customer_id, customer_name, staff_id, slot_date, slot_time,
                                  service_ids, total_price, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(appointment.customer_id)
    .bind(appointment.customer_name.as_deref())
    .bind(appointment.staff_id)
    .bind(&appointment.date)
    .bind(&appointment.time)
    .bind(&appointment.service_ids)
    .bind(appointment.total_price)
    .bind(appointment.status.as_str())
    .bind(appointment.created_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_appointment_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbAppointment>> {
    let row = sqlx::query_as::<_, DbAppointment>(&format!(
        "SELECT {COLUMNS} FROM appointments WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// First appointment other than `exclude` that still occupies `slot`.
pub async fn find_conflicting_appointment(
    pool: &Pool<Postgres>,
    slot: &SlotKey,
    exclude: Option<Uuid>,
) -> Result<Option<DbAppointment>> {
    tracing::debug!(
        "Checking appointments: staff_id={}, date={}, time={}, exclude={:?}",
        slot.staff_id, slot.date, slot.time, exclude
    );

    let row = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM appointments
        WHERE staff_id = $1
          AND slot_date = $2
          AND slot_time = $3
          AND status <> $4
          AND ($5::uuid IS NULL OR id <> $5)
        LIMIT 1
        "#
    ))
    .bind(slot.staff_id)
    .bind(&slot.date)
    .bind(&slot.time)
    .bind(AppointmentStatus::Cancelled.as_str())
    .bind(exclude)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn update_appointment(
    pool: &Pool<Postgres>,
    id: Uuid,
    changes: &AppointmentChanges,
) -> Result<Option<DbAppointment>> {
    let row = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        UPDATE appointments
        SET slot_date = COALESCE($2, slot_date),
            slot_time = COALESCE($3, slot_time),
            status = COALESCE($4, status),
            cancel_reason = CASE WHEN $7 THEN NULL ELSE COALESCE($5, cancel_reason) END,
            updated_at = $6
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(changes.date.as_deref())
    .bind(changes.time.as_deref())
    .bind(changes.status.map(|s| s.as_str()))
    .bind(changes.cancel_reason.as_deref())
    .bind(changes.updated_at)
    .bind(changes.clear_cancel_reason)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn list_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(&format!(
        "SELECT {COLUMNS} FROM appointments ORDER BY slot_date ASC, slot_time ASC, created_at ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
