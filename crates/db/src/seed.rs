//! Demo directory of recruiters and candidates.
//!
//! Used by `db-migrate` to populate an empty database and by the in-memory
//! backend at start-up.

use eyre::Result;
use slotbook_core::models::user::{Candidate, Recruiter, User};
use sqlx::{Pool, Postgres};
use tracing::info;
use uuid::Uuid;

use crate::repositories::directory;

fn user(name: &str, email: &str, timezone: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        timezone: timezone.to_string(),
    }
}

pub fn demo_recruiters() -> Vec<Recruiter> {
    vec![
        Recruiter {
            id: Uuid::new_v4(),
            user: user("Alice", "alice@example.com", "America/New_York"),
            company: "Tech Corp".to_string(),
            title: Some("HR Manager".to_string()),
        },
        Recruiter {
            id: Uuid::new_v4(),
            user: user("Bob", "bob@example.com", "Europe/London"),
            company: "Biz Inc".to_string(),
            title: Some("Recruitment Specialist".to_string()),
        },
    ]
}

pub fn demo_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: Uuid::new_v4(),
            user: user("Charlie", "charlie@example.com", "Asia/Tokyo"),
            phone: Some("+81-90-1234-5678".to_string()),
        },
        Candidate {
            id: Uuid::new_v4(),
            user: user("Dave", "dave@example.com", "Australia/Sydney"),
            phone: Some("+61-2-1234-5678".to_string()),
        },
    ]
}

/// Inserts the demo directory unless recruiters already exist.
///
/// Returns true if rows were written.
pub async fn seed_directory(pool: &Pool<Postgres>) -> Result<bool> {
    if directory::count_recruiters(pool).await? > 0 {
        info!("Directory already populated, skipping seed.");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for recruiter in demo_recruiters() {
        let u = &recruiter.user;
        directory::create_user(&mut *tx, u.id, &u.name, &u.email, &u.timezone).await?;
        directory::create_recruiter(
            &mut *tx,
            recruiter.id,
            u.id,
            &recruiter.company,
            recruiter.title.as_deref(),
        )
        .await?;
    }

    for candidate in demo_candidates() {
        let u = &candidate.user;
        directory::create_user(&mut *tx, u.id, &u.name, &u.email, &u.timezone).await?;
        directory::create_candidate(&mut *tx, candidate.id, u.id, candidate.phone.as_deref())
            .await?;
    }

    tx.commit().await?;

    info!("Seeded demo recruiters and candidates.");
    Ok(true)
}
