use crate::models::DbTimeSlot;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn create_time_slot<'e, E: PgExecutor<'e>>(
    executor: E,
    recruiter_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    timezone: &str,
) -> Result<DbTimeSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating time slot: id={}, recruiter_id={}, start={}, end={}, timezone={}",
        id, recruiter_id, start_time, end_time, timezone
    );

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (id, recruiter_id, start_time, end_time, timezone, status, created_at)
        VALUES ($1, $2, $3, $4, $5, 'AVAILABLE', $6)
        RETURNING id, recruiter_id, start_time, end_time, timezone, status, created_at
        "#,
    )
    .bind(id)
    .bind(recruiter_id)
    .bind(start_time)
    .bind(end_time)
    .bind(timezone)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slot_by_id<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, recruiter_id, start_time, end_time, timezone, status, created_at
        FROM time_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slots_by_recruiter_id<'e, E: PgExecutor<'e>>(
    executor: E,
    recruiter_id: Uuid,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, recruiter_id, start_time, end_time, timezone, status, created_at
        FROM time_slots
        WHERE recruiter_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(recruiter_id)
    .fetch_all(executor)
    .await?;

    Ok(time_slots)
}

pub async fn get_all_time_slots<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, recruiter_id, start_time, end_time, timezone, status, created_at
        FROM time_slots
        ORDER BY start_time ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(time_slots)
}

pub async fn update_time_slot_status<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    status: &str,
) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        UPDATE time_slots
        SET status = $2
        WHERE id = $1
        RETURNING id, recruiter_id, start_time, end_time, timezone, status, created_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(executor)
    .await?;

    Ok(time_slot)
}

/// Updates the status only while it still equals `expected`.
///
/// Returns `None` when zero rows matched.
pub async fn compare_and_set_time_slot_status<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    expected: &str,
    status: &str,
) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        UPDATE time_slots
        SET status = $3
        WHERE id = $1 AND status = $2
        RETURNING id, recruiter_id, start_time, end_time, timezone, status, created_at
        "#,
    )
    .bind(id)
    .bind(expected)
    .bind(status)
    .fetch_optional(executor)
    .await?;

    Ok(time_slot)
}
