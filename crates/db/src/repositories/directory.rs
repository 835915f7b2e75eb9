use crate::models::{DbCandidate, DbRecruiter};
use eyre::Result;
use sqlx::PgExecutor;
use uuid::Uuid;

// Users

pub async fn create_user<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    name: &str,
    email: &str,
    timezone: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, timezone)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(timezone)
    .execute(executor)
    .await?;

    Ok(())
}

// Recruiters

pub async fn create_recruiter<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    user_id: Uuid,
    company: &str,
    title: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO recruiters (id, user_id, company, title)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(company)
    .bind(title)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn get_recruiters<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<DbRecruiter>> {
    let recruiters = sqlx::query_as::<_, DbRecruiter>(
        r#"
        SELECT r.id, r.user_id, u.name, u.email, u.timezone, r.company, r.title
        FROM recruiters r
        JOIN users u ON u.id = r.user_id
        ORDER BY u.name ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(recruiters)
}

pub async fn recruiter_exists<'e, E: PgExecutor<'e>>(executor: E, id: Uuid) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM recruiters WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(executor)
    .await?;

    Ok(exists)
}

pub async fn count_recruiters<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recruiters")
        .fetch_one(executor)
        .await?;

    Ok(count)
}

// Candidates

pub async fn create_candidate<'e, E: PgExecutor<'e>>(
    executor: E,
    id: Uuid,
    user_id: Uuid,
    phone: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO candidates (id, user_id, phone)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(phone)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn get_candidates<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<DbCandidate>> {
    let candidates = sqlx::query_as::<_, DbCandidate>(
        r#"
        SELECT c.id, c.user_id, u.name, u.email, u.timezone, c.phone
        FROM candidates c
        JOIN users u ON u.id = c.user_id
        ORDER BY u.name ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(candidates)
}

pub async fn candidate_exists<'e, E: PgExecutor<'e>>(executor: E, id: Uuid) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM candidates WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(executor)
    .await?;

    Ok(exists)
}
