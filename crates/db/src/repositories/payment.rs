use crate::models::DbPayment;
use chrono::Utc;
use eyre::Result;
use salonbook_core::models::payment::NewPayment;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_payment(pool: &Pool<Postgres>, payment: &NewPayment) -> Result<DbPayment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbPayment>(
        r#"
        INSERT INTO payments (id, appointment_id, amount, method, reference, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, appointment_id, amount, method, reference, status, created_at
        "#,
    )
    .bind(id)
    .bind(payment.appointment_id)
    .bind(payment.amount)
    .bind(&payment.method)
    .bind(payment.reference.as_deref())
    .bind(&payment.status)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_payments(pool: &Pool<Postgres>) -> Result<Vec<DbPayment>> {
    let rows = sqlx::query_as::<_, DbPayment>(
        r#"
        SELECT id, appointment_id, amount, method, reference, status, created_at
        FROM payments
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
