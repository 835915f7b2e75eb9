use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conflict::Interval;
use crate::errors::{SchedulerError, SchedulerResult};
use crate::timezone::parse_timezone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Available,
    Booked,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "AVAILABLE",
            SlotStatus::Booked => "BOOKED",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(SlotStatus::Available),
            "BOOKED" => Ok(SlotStatus::Booked),
            other => Err(SchedulerError::Validation(format!(
                "Unknown slot status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub timezone: String,
    pub status: SlotStatus,
    pub created_at: DateTime<Utc>,
}

impl TimeSlot {
    pub fn interval(&self) -> Interval {
        Interval::new_unchecked(self.start_time, self.end_time)
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// A slot that has passed input validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeSlot {
    pub recruiter_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub timezone: String,
}

impl NewTimeSlot {
    pub fn new(
        recruiter_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            recruiter_id,
            start_time,
            end_time,
            timezone: timezone.into(),
        }
    }

    /// Rejects empty or inverted ranges and unknown IANA zones.
    pub fn validate(&self) -> SchedulerResult<Interval> {
        parse_timezone(&self.timezone)?;
        Interval::new(self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimeSlotRequest {
    pub recruiter_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl From<CreateTimeSlotRequest> for NewTimeSlot {
    fn from(request: CreateTimeSlotRequest) -> Self {
        NewTimeSlot::new(
            request.recruiter_id,
            request.start_time,
            request.end_time,
            request.timezone,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimeSlotResponse {
    pub slot: TimeSlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTimeSlotsResponse {
    pub slots: Vec<TimeSlot>,
}
