use crate::models::DbEmployee;
use chrono::Utc;
use eyre::Result;
use salonbook_core::models::employee::NewEmployee;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_employee(pool: &Pool<Postgres>, employee: &NewEmployee) -> Result<DbEmployee> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbEmployee>(
        r#"
        INSERT INTO employees (id, name, email, phone, specialty, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, phone, specialty, created_at
        "#,
    )
    .bind(id)
    .bind(&employee.name)
    .bind(&employee.email)
    .bind(employee.phone.as_deref())
    .bind(employee.specialty.as_deref())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_employee_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbEmployee>> {
    let row = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, email, phone, specialty, created_at
        FROM employees
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn list_employees(pool: &Pool<Postgres>) -> Result<Vec<DbEmployee>> {
    let rows = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, email, phone, specialty, created_at
        FROM employees
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
