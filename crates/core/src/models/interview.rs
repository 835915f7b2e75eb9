use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SchedulerError;
use crate::models::time_slot::TimeSlot;
use crate::models::user::{Candidate, Recruiter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewMode {
    InPerson,
    Video,
    Phone,
}

impl InterviewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewMode::InPerson => "IN_PERSON",
            InterviewMode::Video => "VIDEO",
            InterviewMode::Phone => "PHONE",
        }
    }
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewMode {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PERSON" => Ok(InterviewMode::InPerson),
            "VIDEO" => Ok(InterviewMode::Video),
            "PHONE" => Ok(InterviewMode::Phone),
            other => Err(SchedulerError::Validation(format!(
                "Unknown interview mode: {}",
                other
            ))),
        }
    }
}

/// Lifecycle of an interview.
///
/// `Scheduled` and `Rescheduled` are open for booking. `Confirmed` is entered
/// only by booking a slot. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Rescheduled,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "SCHEDULED",
            InterviewStatus::Confirmed => "CONFIRMED",
            InterviewStatus::Completed => "COMPLETED",
            InterviewStatus::Cancelled => "CANCELLED",
            InterviewStatus::Rescheduled => "RESCHEDULED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InterviewStatus::Completed | InterviewStatus::Cancelled)
    }

    pub fn is_bookable(&self) -> bool {
        matches!(self, InterviewStatus::Scheduled | InterviewStatus::Rescheduled)
    }

    pub fn can_transition_to(&self, next: InterviewStatus) -> bool {
        use InterviewStatus::*;

        matches!(
            (self, next),
            (Scheduled | Rescheduled, Confirmed)
                | (Scheduled | Rescheduled, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStatus {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCHEDULED" => Ok(InterviewStatus::Scheduled),
            "CONFIRMED" => Ok(InterviewStatus::Confirmed),
            "COMPLETED" => Ok(InterviewStatus::Completed),
            "CANCELLED" => Ok(InterviewStatus::Cancelled),
            "RESCHEDULED" => Ok(InterviewStatus::Rescheduled),
            other => Err(SchedulerError::Validation(format!(
                "Unknown interview status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub candidate_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub mode: InterviewMode,
    pub status: InterviewStatus,
    pub candidate_slot_ids: Vec<Uuid>,
    pub booked_slot_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Interview {
    pub fn offers_slot(&self, slot_id: Uuid) -> bool {
        self.candidate_slot_ids.contains(&slot_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInterview {
    pub recruiter_id: Uuid,
    pub candidate_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub mode: InterviewMode,
    pub candidate_slot_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInterviewRequest {
    pub recruiter_id: Uuid,
    pub candidate_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub mode: InterviewMode,
    #[serde(default)]
    pub candidate_slot_ids: Vec<Uuid>,
}

impl From<CreateInterviewRequest> for NewInterview {
    fn from(request: CreateInterviewRequest) -> Self {
        Self {
            recruiter_id: request.recruiter_id,
            candidate_id: request.candidate_id,
            title: request.title,
            description: request.description,
            location: request.location,
            mode: request.mode,
            candidate_slot_ids: request.candidate_slot_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub slot_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInterviewStatusRequest {
    pub status: InterviewStatus,
}

/// An interview with its slots and participants resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewDetails {
    #[serde(flatten)]
    pub interview: Interview,
    pub candidate_slots: Vec<TimeSlot>,
    pub booked_slot: Option<TimeSlot>,
    pub recruiter: Option<Recruiter>,
    pub candidate: Option<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponse {
    pub interview: InterviewDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInterviewsResponse {
    pub interviews: Vec<InterviewDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteInterviewResponse {
    pub message: String,
}
