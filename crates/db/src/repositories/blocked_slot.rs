use crate::models::DbBlockedSlot;
use eyre::Result;
use salonbook_core::models::slot::{BlockedSlotFilter, NewBlockedSlot, SlotKey};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_blocked_slot(pool: &Pool<Postgres>, slot: &NewBlockedSlot) -> Result<DbBlockedSlot> {
    let id = Uuid::new_v4();

    let row = sqlx::query_as::<_, DbBlockedSlot>(
        r#"
        INSERT INTO blocked_slots (id, staff_id, slot_date, slot_time, reason, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, staff_id, slot_date, slot_time, reason, created_at
        "#,
    )
    .bind(id)
    .bind(slot.slot.staff_id)
    .bind(&slot.slot.date)
    .bind(&slot.slot.time)
    .bind(slot.reason.as_deref())
    .bind(slot.created_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn find_blocked_slot(pool: &Pool<Postgres>, slot: &SlotKey) -> Result<Option<DbBlockedSlot>> {
    tracing::debug!(
        "Checking blocked slots: staff_id={}, date={}, time={}",
        slot.staff_id, slot.date, slot.time
    );

    let row = sqlx::query_as::<_, DbBlockedSlot>(
        r#"
        SELECT id, staff_id, slot_date, slot_time, reason, created_at
        FROM blocked_slots
        WHERE slot_date = $1 AND staff_id = $2 AND slot_time = $3
        LIMIT 1
        "#,
    )
    .bind(&slot.date)
    .bind(slot.staff_id)
    .bind(&slot.time)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn list_blocked_slots(pool: &Pool<Postgres>, filter: &BlockedSlotFilter) -> Result<Vec<DbBlockedSlot>> {
    let rows = sqlx::query_as::<_, DbBlockedSlot>(
        r#"
        SELECT id, staff_id, slot_date, slot_time, reason, created_at
        FROM blocked_slots
        WHERE ($1::text IS NULL OR slot_date = $1)
          AND ($2::uuid IS NULL OR staff_id = $2)
        ORDER BY slot_date ASC, slot_time ASC, created_at ASC
        "#,
    )
    .bind(filter.date.as_deref())
    .bind(filter.staff_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn delete_blocked_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM blocked_slots WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
