//! # Slot Conflict Detection
//!
//! Slots are half-open intervals `[start, end)` over absolute UTC instants.
//! Two intervals conflict iff `a.start < b.end && b.start < a.end`, so slots
//! that merely touch (`a.end == b.start`) can sit side by side.
//!
//! The timezone label stored with a slot never takes part in the comparison.
//! `09:00-05:00` and `14:00Z` are the same instant once parsed into
//! `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{SchedulerError, SchedulerResult};
use crate::models::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Builds an interval, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> SchedulerResult<Self> {
        if end <= start {
            return Err(SchedulerError::Validation(format!(
                "End time {} must be after start time {}",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    pub(crate) fn new_unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Returns true if `[proposed_start, proposed_end)` overlaps any existing slot.
pub fn check_conflict(
    existing: &[TimeSlot],
    proposed_start: DateTime<Utc>,
    proposed_end: DateTime<Utc>,
) -> bool {
    find_conflict(existing, proposed_start, proposed_end).is_some()
}

/// Returns the first existing slot that overlaps the proposed range.
pub fn find_conflict(
    existing: &[TimeSlot],
    proposed_start: DateTime<Utc>,
    proposed_end: DateTime<Utc>,
) -> Option<&TimeSlot> {
    let proposed = Interval::new_unchecked(proposed_start, proposed_end);
    existing.iter().find(|slot| slot.interval().overlaps(&proposed))
}
