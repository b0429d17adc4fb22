use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const INDEXES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_appointments_slot ON appointments(staff_id, slot_date, slot_time)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_order ON appointments(slot_date, slot_time)",
    "CREATE INDEX IF NOT EXISTS idx_blocked_slots_slot ON blocked_slots(slot_date, staff_id, slot_time)",
    "CREATE INDEX IF NOT EXISTS idx_payments_appointment_id ON payments(appointment_id)",
];

/// Creates every table and index if missing. Safe to run on each start.
///
/// `staff_id` columns carry no foreign key: removing an employee leaves its
/// appointments and blocked slots in place. No unique index covers the
/// appointment slot; only the booking service's conflict check prevents
/// double-booking.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            phone VARCHAR(64) NULL,
            password_hash VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create employees table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            phone VARCHAR(64) NULL,
            specialty VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price DOUBLE PRECISION NOT NULL,
            duration_minutes INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_price CHECK (price > 0),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_id UUID NOT NULL,
            customer_name VARCHAR(255) NULL,
            staff_id UUID NULL,
            slot_date VARCHAR(10) NOT NULL,
            slot_time VARCHAR(16) NOT NULL,
            service_ids UUID[] NOT NULL DEFAULT '{}',
            total_price DOUBLE PRECISION NOT NULL,
            status VARCHAR(16) NOT NULL,
            cancel_reason TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT non_negative_total CHECK (total_price >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create blocked_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blocked_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            staff_id UUID NOT NULL,
            slot_date VARCHAR(10) NOT NULL,
            slot_time VARCHAR(16) NOT NULL,
            reason TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create payments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS payments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            appointment_id UUID NULL,
            amount DOUBLE PRECISION NOT NULL,
            method VARCHAR(64) NOT NULL,
            reference VARCHAR(255) NULL,
            status VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
