use crate::models::DbService;
use chrono::Utc;
use eyre::{eyre, Result};
use salonbook_core::models::service::{NewService, ServiceChanges};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(pool: &Pool<Postgres>, service: &NewService) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, name, description, price, duration_minutes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id, name, description, price, duration_minutes, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&service.name)
    .bind(&service.description)
    .bind(service.price)
    .bind(service.duration_minutes)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let row = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, price, duration_minutes, created_at, updated_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn list_services(pool: &Pool<Postgres>) -> Result<Vec<DbService>> {
    let rows = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, price, duration_minutes, created_at, updated_at
        FROM services
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn update_service(pool: &Pool<Postgres>, id: Uuid, changes: &ServiceChanges) -> Result<DbService> {
    let service = get_service_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Service not found"))?;

    let name = changes.name.as_deref().unwrap_or(&service.name);
    let description = changes.description.as_deref().unwrap_or(&service.description);

    let updated_service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = $2, description = $3, price = $4, duration_minutes = $5, updated_at = $6
        WHERE id = $1
        RETURNING id, name, description, price, duration_minutes, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(changes.price.unwrap_or(service.price))
    .bind(changes.duration_minutes.unwrap_or(service.duration_minutes))
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(updated_service)
}

pub async fn delete_service(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
