use crate::models::{DbInterview, DbInterviewSlot};
use chrono::Utc;
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

pub struct InsertInterview<'a> {
    pub recruiter_id: Uuid,
    pub candidate_id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub mode: &'a str,
}

pub async fn create_interview<'e, E: PgExecutor<'e>>(
    executor: E,
    interview: InsertInterview<'_>,
) -> Result<DbInterview> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating interview: id={}, recruiter_id={}, candidate_id={}",
        id, interview.recruiter_id, interview.candidate_id
    );

    let row = sqlx::query_as::<_, DbInterview>(
        r#"
        INSERT INTO interviews
            (id, recruiter_id, candidate_id, title, description, location, mode, status,
             booked_slot_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'SCHEDULED', NULL, $8, $8)
        RETURNING id, recruiter_id, candidate_id, title, description, location, mode, status,
                  booked_slot_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(interview.recruiter_id)
    .bind(interview.candidate_id)
    .bind(interview.title)
    .bind(interview.description)
    .bind(interview.location)
    .bind(interview.mode)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

pub async fn add_interview_slot<'e, E: PgExecutor<'e>>(
    executor: E,
    interview_id: Uuid,
    slot_id: Uuid,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO interview_slots (interview_id, slot_id)
        VALUES ($1, $2)
        ON CONFLICT (interview_id, slot_id) DO NOTHING
        "#,
    )
    .bind(interview_id)
    .bind(slot_id)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn get_interview_by_id<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
) -> Result<Option<DbInterview>> {
    let row = sqlx::query_as::<_, DbInterview>(
        r#"
        SELECT id, recruiter_id, candidate_id, title, description, location, mode, status,
               booked_slot_id, created_at, updated_at
        FROM interviews
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn get_interviews<'e, E: PgExecutor<'e>>(
    executor: E,
    candidate_id: Option<Uuid>,
) -> Result<Vec<DbInterview>> {
    let rows = sqlx::query_as::<_, DbInterview>(
        r#"
        SELECT id, recruiter_id, candidate_id, title, description, location, mode, status,
               booked_slot_id, created_at, updated_at
        FROM interviews
        WHERE $1::uuid IS NULL OR candidate_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(candidate_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Offered slot ids per interview, ordered by slot start time.
pub async fn get_interview_slots<'e, E: PgExecutor<'e>>(
    executor: E,
    interview_ids: &[Uuid],
) -> Result<Vec<DbInterviewSlot>> {
    let links = sqlx::query_as::<_, DbInterviewSlot>(
        r#"
        SELECT links.interview_id, links.slot_id
        FROM interview_slots links
        JOIN time_slots ts ON ts.id = links.slot_id
        WHERE links.interview_id = ANY($1)
        ORDER BY ts.start_time ASC
        "#,
    )
    .bind(interview_ids)
    .fetch_all(executor)
    .await?;

    Ok(links)
}

pub async fn update_interview_booking<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    status: &str,
    booked_slot_id: Option<Uuid>,
) -> Result<Option<DbInterview>> {
    let row = sqlx::query_as::<_, DbInterview>(
        r#"
        UPDATE interviews
        SET status = $2, booked_slot_id = $3, updated_at = $4
        WHERE id = $1
        RETURNING id, recruiter_id, candidate_id, title, description, location, mode, status,
                  booked_slot_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(booked_slot_id)
    .bind(Utc::now())
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn delete_interview<'e, E: PgExecutor<'e>>(executor: E, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM interviews
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
