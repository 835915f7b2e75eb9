use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            timezone VARCHAR(64) NOT NULL DEFAULT 'UTC',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create recruiters table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recruiters (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL UNIQUE REFERENCES users(id),
            company VARCHAR(255) NOT NULL,
            title VARCHAR(255) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create candidates table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS candidates (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL UNIQUE REFERENCES users(id),
            phone VARCHAR(64) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            recruiter_id UUID NOT NULL REFERENCES recruiters(id),
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            timezone VARCHAR(64) NOT NULL DEFAULT 'UTC',
            status VARCHAR(16) NOT NULL DEFAULT 'AVAILABLE',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_slot_status CHECK (status IN ('AVAILABLE', 'BOOKED'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create interviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            recruiter_id UUID NOT NULL REFERENCES recruiters(id),
            candidate_id UUID NOT NULL REFERENCES candidates(id),
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            location VARCHAR(255) NULL,
            mode VARCHAR(16) NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'SCHEDULED',
            booked_slot_id UUID NULL UNIQUE REFERENCES time_slots(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_interview_mode CHECK (mode IN ('IN_PERSON', 'VIDEO', 'PHONE')),
            CONSTRAINT valid_interview_status CHECK (
                status IN ('SCHEDULED', 'CONFIRMED', 'COMPLETED', 'CANCELLED', 'RESCHEDULED')
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create interview_slots table (slots offered to an interview)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interview_slots (
            interview_id UUID NOT NULL REFERENCES interviews(id) ON DELETE CASCADE,
            slot_id UUID NOT NULL REFERENCES time_slots(id),
            PRIMARY KEY (interview_id, slot_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes. Several statements in one string need the simple query
    // protocol, which `Executor::execute` on a plain &str uses.
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_time_slots_recruiter_id ON time_slots(recruiter_id);
        CREATE INDEX IF NOT EXISTS idx_time_slots_start_time ON time_slots(start_time);
        CREATE INDEX IF NOT EXISTS idx_time_slots_end_time ON time_slots(end_time);
        CREATE INDEX IF NOT EXISTS idx_interviews_candidate_id ON interviews(candidate_id);
        CREATE INDEX IF NOT EXISTS idx_interviews_recruiter_id ON interviews(recruiter_id);
        CREATE INDEX IF NOT EXISTS idx_interview_slots_slot_id ON interview_slots(slot_id);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
