//! # Booking Coordinator
//!
//! Drives every state change of slots and interviews. Each operation runs
//! inside a single store transaction: read, decide, write, commit. An error
//! at any step drops the transaction, so a failed call leaves the store as it
//! was.
//!
//! ## Slot proposals
//!
//! A recruiter's slots never overlap. [`BookingCoordinator::propose_slot`]
//! lists the recruiter's slots and rejects the proposal with
//! `SchedulerError::Conflict` if [`find_conflict`] reports an overlap.
//!
//! ## Booking
//!
//! [`BookingCoordinator::book_slot`] moves the slot `AVAILABLE -> BOOKED` with
//! a conditional update and the interview `SCHEDULED -> CONFIRMED`. A slot can
//! be claimed once; the loser of a race gets `SchedulerError::AlreadyBooked`.

use std::sync::Arc;

use uuid::Uuid;

use crate::conflict::find_conflict;
use crate::errors::{SchedulerError, SchedulerResult};
use crate::models::{
    interview::{Interview, InterviewStatus, NewInterview},
    time_slot::{NewTimeSlot, SlotStatus, TimeSlot},
};
use crate::store::{SchedulingStore, StoreTransaction};

/// How many times a booking is attempted when the store reports a conflict.
const BOOKING_ATTEMPTS: usize = 3;

#[derive(Clone)]
pub struct BookingCoordinator {
    store: Arc<dyn SchedulingStore>,
}

impl BookingCoordinator {
    pub fn new(store: Arc<dyn SchedulingStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn SchedulingStore> {
        &self.store
    }

    /// Creates a slot for a recruiter unless it overlaps one they already own.
    ///
    /// # Errors
    ///
    /// * `Validation` - `end_time <= start_time` or unknown timezone
    /// * `NotFound` - the recruiter does not exist
    /// * `Conflict` - the range overlaps an existing slot of the recruiter
    pub async fn propose_slot(&self, slot: NewTimeSlot) -> SchedulerResult<TimeSlot> {
        let interval = slot.validate()?;

        let mut tx = self.store.begin().await?;

        if !tx.recruiter_exists(slot.recruiter_id).await? {
            return Err(SchedulerError::NotFound(format!(
                "Recruiter with ID {} not found",
                slot.recruiter_id
            )));
        }

        let existing = tx.list_slots(slot.recruiter_id).await?;
        if let Some(clash) = find_conflict(&existing, interval.start, interval.end) {
            return Err(SchedulerError::Conflict(format!(
                "Proposed slot {} - {} overlaps slot {} ({} - {})",
                interval.start.to_rfc3339(),
                interval.end.to_rfc3339(),
                clash.id,
                clash.start_time.to_rfc3339(),
                clash.end_time.to_rfc3339()
            )));
        }

        let created = tx.create_slot(slot).await?;
        tx.commit().await?;

        Ok(created)
    }

    /// Books `slot_id` for an interview and confirms the interview.
    ///
    /// A transaction that loses a serialization race is retried. If every
    /// attempt conflicts, the slot is re-read: `AlreadyBooked` is reported
    /// only when it is no longer `AVAILABLE`, otherwise the `Conflict` is
    /// returned as is.
    ///
    /// # Errors
    ///
    /// * `NotFound` - unknown interview or slot
    /// * `AlreadyBooked` - the slot is not `AVAILABLE` at commit time
    /// * `Validation` - the slot was not offered to this interview, or the
    ///   interview cannot move to `CONFIRMED`
    /// * `Conflict` - concurrent writers kept aborting the transaction
    pub async fn book_slot(&self, interview_id: Uuid, slot_id: Uuid) -> SchedulerResult<Interview> {
        let mut attempt = 1;
        loop {
            match self.try_book_slot(interview_id, slot_id).await {
                Err(SchedulerError::Conflict(_)) if attempt < BOOKING_ATTEMPTS => attempt += 1,
                Err(SchedulerError::Conflict(message)) => {
                    return Err(self.classify_booking_conflict(slot_id, message).await);
                }
                result => return result,
            }
        }
    }

    async fn classify_booking_conflict(&self, slot_id: Uuid, message: String) -> SchedulerError {
        let slot = match self.store.begin().await {
            Ok(mut tx) => tx.get_slot(slot_id).await,
            Err(err) => Err(err),
        };

        match slot {
            Ok(Some(slot)) if !slot.is_available() => SchedulerError::AlreadyBooked(slot_id),
            Ok(_) => SchedulerError::Conflict(message),
            Err(err) => err,
        }
    }

    async fn try_book_slot(&self, interview_id: Uuid, slot_id: Uuid) -> SchedulerResult<Interview> {
        let mut tx = self.store.begin().await?;

        let interview = load_interview(tx.as_mut(), interview_id).await?;
        let slot = tx
            .get_slot(slot_id)
            .await?
            .ok_or_else(|| SchedulerError::slot_not_found(slot_id))?;

        if !slot.is_available() {
            return Err(SchedulerError::AlreadyBooked(slot_id));
        }

        if !interview.offers_slot(slot_id) {
            return Err(SchedulerError::Validation(format!(
                "Slot {} is not offered for interview {}",
                slot_id, interview_id
            )));
        }

        if !interview.status.is_bookable() {
            return Err(SchedulerError::Validation(format!(
                "Interview {} is {} and cannot be booked",
                interview_id, interview.status
            )));
        }

        tx.compare_and_set_status(slot_id, SlotStatus::Available, SlotStatus::Booked)
            .await?
            .ok_or(SchedulerError::AlreadyBooked(slot_id))?;

        let confirmed = tx
            .update_interview(interview_id, InterviewStatus::Confirmed, Some(slot_id))
            .await?;

        tx.commit().await?;

        Ok(confirmed)
    }

    /// Creates a `SCHEDULED` interview offering some of the recruiter's slots.
    ///
    /// Duplicate slot ids are collapsed and the offered slots are kept in
    /// start-time order.
    pub async fn create_interview(&self, mut interview: NewInterview) -> SchedulerResult<Interview> {
        if interview.title.trim().is_empty() {
            return Err(SchedulerError::Validation(
                "Interview title must not be empty".to_string(),
            ));
        }

        let mut tx = self.store.begin().await?;

        if !tx.recruiter_exists(interview.recruiter_id).await? {
            return Err(SchedulerError::NotFound(format!(
                "Recruiter with ID {} not found",
                interview.recruiter_id
            )));
        }
        if !tx.candidate_exists(interview.candidate_id).await? {
            return Err(SchedulerError::NotFound(format!(
                "Candidate with ID {} not found",
                interview.candidate_id
            )));
        }

        let mut offered: Vec<TimeSlot> = Vec::with_capacity(interview.candidate_slot_ids.len());
        for slot_id in &interview.candidate_slot_ids {
            if offered.iter().any(|slot| slot.id == *slot_id) {
                continue;
            }
            let slot = tx
                .get_slot(*slot_id)
                .await?
                .ok_or_else(|| SchedulerError::slot_not_found(*slot_id))?;
            if slot.recruiter_id != interview.recruiter_id {
                return Err(SchedulerError::Validation(format!(
                    "Slot {} belongs to another recruiter",
                    slot_id
                )));
            }
            offered.push(slot);
        }
        offered.sort_by_key(|slot| slot.start_time);
        interview.candidate_slot_ids = offered.into_iter().map(|slot| slot.id).collect();

        let created = tx.create_interview(interview).await?;
        tx.commit().await?;

        Ok(created)
    }

    /// Applies a recruiter-driven status change such as cancel or complete.
    ///
    /// `CONFIRMED` is only reachable through [`Self::book_slot`]. A booked
    /// slot stays `BOOKED` when its interview is cancelled.
    pub async fn transition_interview(
        &self,
        interview_id: Uuid,
        status: InterviewStatus,
    ) -> SchedulerResult<Interview> {
        if status == InterviewStatus::Confirmed {
            return Err(SchedulerError::Validation(
                "Interviews are confirmed by booking a slot".to_string(),
            ));
        }

        let mut tx = self.store.begin().await?;
        let interview = load_interview(tx.as_mut(), interview_id).await?;

        if !interview.status.can_transition_to(status) {
            return Err(SchedulerError::Validation(format!(
                "Interview {} cannot move from {} to {}",
                interview_id, interview.status, status
            )));
        }

        let updated = tx
            .update_interview(interview_id, status, interview.booked_slot_id)
            .await?;
        tx.commit().await?;

        Ok(updated)
    }
}

async fn load_interview(
    tx: &mut dyn StoreTransaction,
    interview_id: Uuid,
) -> SchedulerResult<Interview> {
    tx.get_interview(interview_id)
        .await?
        .ok_or_else(|| SchedulerError::interview_not_found(interview_id))
}
