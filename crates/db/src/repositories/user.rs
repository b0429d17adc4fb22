use crate::models::DbUser;
use eyre::Result;
use salonbook_core::{models::user::NewUser, store::DuplicateKey};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_user(pool: &Pool<Postgres>, user: &NewUser) -> Result<DbUser> {
    let id = Uuid::new_v4();

    let row = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, name, email, phone, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, phone, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.phone.as_deref())
    .bind(&user.password_hash)
    .bind(user.created_at)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
            eyre::Report::new(DuplicateKey(format!("email {}", user.email)))
        } else {
            eyre::Report::from(e)
        }
    })?;

    Ok(row)
}

pub async fn get_user_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbUser>> {
    let row = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, phone, password_hash, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn list_users(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    let rows = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, phone, password_hash, created_at
        FROM users
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
