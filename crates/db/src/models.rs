use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use slotbook_core::models::{
    interview::Interview,
    time_slot::TimeSlot,
    user::{Candidate, Recruiter, User},
};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub timezone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbTimeSlot> for TimeSlot {
    type Error = eyre::Report;

    fn try_from(row: DbTimeSlot) -> Result<Self> {
        let status = row
            .status
            .parse()
            .map_err(|e| eyre!("Invalid status on time slot {}: {}", row.id, e))?;

        Ok(TimeSlot {
            id: row.id,
            recruiter_id: row.recruiter_id,
            start_time: row.start_time,
            end_time: row.end_time,
            timezone: row.timezone,
            status,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInterview {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub candidate_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub mode: String,
    pub status: String,
    pub booked_slot_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbInterview {
    pub fn into_interview(self, candidate_slot_ids: Vec<Uuid>) -> Result<Interview> {
        let mode = self
            .mode
            .parse()
            .map_err(|e| eyre!("Invalid mode on interview {}: {}", self.id, e))?;
        let status = self
            .status
            .parse()
            .map_err(|e| eyre!("Invalid status on interview {}: {}", self.id, e))?;

        Ok(Interview {
            id: self.id,
            recruiter_id: self.recruiter_id,
            candidate_id: self.candidate_id,
            title: self.title,
            description: self.description,
            location: self.location,
            mode,
            status,
            candidate_slot_ids,
            booked_slot_id: self.booked_slot_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInterviewSlot {
    pub interview_id: Uuid,
    pub slot_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRecruiter {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub timezone: String,
    pub company: String,
    pub title: Option<String>,
}

impl From<DbRecruiter> for Recruiter {
    fn from(row: DbRecruiter) -> Self {
        Recruiter {
            id: row.id,
            user: User {
                id: row.user_id,
                name: row.name,
                email: row.email,
                timezone: row.timezone,
            },
            company: row.company,
            title: row.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCandidate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub timezone: String,
    pub phone: Option<String>,
}

impl From<DbCandidate> for Candidate {
    fn from(row: DbCandidate) -> Self {
        Candidate {
            id: row.id,
            user: User {
                id: row.user_id,
                name: row.name,
                email: row.email,
                timezone: row.timezone,
            },
            phone: row.phone,
        }
    }
}
