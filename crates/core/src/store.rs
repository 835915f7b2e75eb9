//! # Store Traits
//!
//! Every state change goes through a [`StoreTransaction`] obtained from
//! [`SchedulingStore::begin`]. Writes become visible only after
//! [`StoreTransaction::commit`]; dropping the transaction discards them.
//!
//! Backends live in `slotbook-db`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::SchedulerResult;
use crate::models::{
    interview::{Interview, InterviewStatus, NewInterview},
    time_slot::{NewTimeSlot, SlotStatus, TimeSlot},
    user::{Candidate, Recruiter},
};

/// Time slot records, scoped to one transaction.
#[async_trait]
pub trait SlotStore: Send {
    /// All slots owned by a recruiter, any status, ordered by start time.
    async fn list_slots(&mut self, recruiter_id: Uuid) -> SchedulerResult<Vec<TimeSlot>>;

    async fn get_slot(&mut self, slot_id: Uuid) -> SchedulerResult<Option<TimeSlot>>;

    /// Stores a new `AVAILABLE` slot.
    ///
    /// Fails with `Validation` if `end_time <= start_time` or the timezone is
    /// unknown.
    async fn create_slot(&mut self, slot: NewTimeSlot) -> SchedulerResult<TimeSlot>;

    /// Unconditionally sets a slot's status. Fails with `NotFound` for an
    /// unknown id.
    async fn set_status(&mut self, slot_id: Uuid, status: SlotStatus) -> SchedulerResult<TimeSlot>;

    /// Sets the status only if it currently equals `expected`.
    ///
    /// Returns `None` when no row matched, either because the slot does not
    /// exist or because its status differs.
    async fn compare_and_set_status(
        &mut self,
        slot_id: Uuid,
        expected: SlotStatus,
        status: SlotStatus,
    ) -> SchedulerResult<Option<TimeSlot>>;
}

/// Interview records and participant lookups, scoped to one transaction.
#[async_trait]
pub trait InterviewStore: Send {
    async fn get_interview(&mut self, interview_id: Uuid) -> SchedulerResult<Option<Interview>>;

    async fn create_interview(&mut self, interview: NewInterview) -> SchedulerResult<Interview>;

    /// Overwrites status and booked slot. Fails with `NotFound` for an
    /// unknown id.
    async fn update_interview(
        &mut self,
        interview_id: Uuid,
        status: InterviewStatus,
        booked_slot_id: Option<Uuid>,
    ) -> SchedulerResult<Interview>;

    async fn recruiter_exists(&mut self, recruiter_id: Uuid) -> SchedulerResult<bool>;

    async fn candidate_exists(&mut self, candidate_id: Uuid) -> SchedulerResult<bool>;
}

/// A unit of work over both stores.
#[async_trait]
pub trait StoreTransaction: SlotStore + InterviewStore {
    async fn commit(&mut self) -> SchedulerResult<()>;
}

/// Entry point to a storage backend.
#[async_trait]
pub trait SchedulingStore: Send + Sync {
    async fn begin(&self) -> SchedulerResult<Box<dyn StoreTransaction>>;

    async fn list_recruiters(&self) -> SchedulerResult<Vec<Recruiter>>;

    async fn list_candidates(&self) -> SchedulerResult<Vec<Candidate>>;

    /// Slots across recruiters, or only those of `recruiter_id` when given.
    async fn list_all_slots(&self, recruiter_id: Option<Uuid>) -> SchedulerResult<Vec<TimeSlot>>;

    /// Interviews across candidates, or only those of `candidate_id` when given.
    async fn list_interviews(&self, candidate_id: Option<Uuid>) -> SchedulerResult<Vec<Interview>>;

    async fn find_interview(&self, interview_id: Uuid) -> SchedulerResult<Option<Interview>>;

    /// Returns false when nothing was deleted.
    async fn delete_interview(&self, interview_id: Uuid) -> SchedulerResult<bool>;
}
