//! In-process scheduling store.
//!
//! A transaction holds the store's mutex for its whole lifetime and works on a
//! staged copy of the state. `commit` publishes the copy; dropping the
//! transaction discards it. Transactions are therefore fully serialized.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use slotbook_core::{
    errors::{SchedulerError, SchedulerResult},
    models::{
        interview::{Interview, InterviewStatus, NewInterview},
        time_slot::{NewTimeSlot, SlotStatus, TimeSlot},
        user::{Candidate, Recruiter},
    },
    store::{InterviewStore, SchedulingStore, SlotStore, StoreTransaction},
};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use uuid::Uuid;

use crate::seed::{demo_candidates, demo_recruiters};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    recruiters: Vec<Recruiter>,
    candidates: Vec<Candidate>,
    slots: HashMap<Uuid, TimeSlot>,
    // Insertion order doubles as creation order.
    interviews: Vec<Interview>,
}

impl MemoryState {
    fn sorted_slots<'a>(slots: impl Iterator<Item = &'a TimeSlot>) -> Vec<TimeSlot> {
        let mut slots: Vec<TimeSlot> = slots.cloned().collect();
        slots.sort_by_key(|slot| (slot.start_time, slot.created_at));
        slots
    }

    fn interview_mut(&mut self, interview_id: Uuid) -> Option<&mut Interview> {
        self.interviews.iter_mut().find(|i| i.id == interview_id)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryStore {
    /// An empty store with no recruiters or candidates.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(recruiters: Vec<Recruiter>, candidates: Vec<Candidate>) -> Self {
        let state = MemoryState {
            recruiters,
            candidates,
            ..MemoryState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// A store populated with the demo recruiters and candidates.
    pub fn seeded() -> Self {
        Self::with_directory(demo_recruiters(), demo_candidates())
    }

    pub async fn add_recruiter(&self, recruiter: Recruiter) {
        self.state.lock().await.recruiters.push(recruiter);
    }

    pub async fn add_candidate(&self, candidate: Candidate) {
        self.state.lock().await.candidates.push(candidate);
    }
}

#[async_trait]
impl SchedulingStore for InMemoryStore {
    async fn begin(&self) -> SchedulerResult<Box<dyn StoreTransaction>> {
        let guard = self.state.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemoryTransaction { guard, staged }))
    }

    async fn list_recruiters(&self) -> SchedulerResult<Vec<Recruiter>> {
        let state = self.state.lock().await;
        let mut recruiters = state.recruiters.clone();
        recruiters.sort_by(|a, b| a.user.name.cmp(&b.user.name));
        Ok(recruiters)
    }

    async fn list_candidates(&self) -> SchedulerResult<Vec<Candidate>> {
        let state = self.state.lock().await;
        let mut candidates = state.candidates.clone();
        candidates.sort_by(|a, b| a.user.name.cmp(&b.user.name));
        Ok(candidates)
    }

    async fn list_all_slots(&self, recruiter_id: Option<Uuid>) -> SchedulerResult<Vec<TimeSlot>> {
        let state = self.state.lock().await;
        Ok(MemoryState::sorted_slots(
            state
                .slots
                .values()
                .filter(|slot| recruiter_id.is_none_or(|id| slot.recruiter_id == id)),
        ))
    }

    async fn list_interviews(&self, candidate_id: Option<Uuid>) -> SchedulerResult<Vec<Interview>> {
        let state = self.state.lock().await;
        Ok(state
            .interviews
            .iter()
            .filter(|i| candidate_id.is_none_or(|id| i.candidate_id == id))
            .cloned()
            .collect())
    }

    async fn find_interview(&self, interview_id: Uuid) -> SchedulerResult<Option<Interview>> {
        let state = self.state.lock().await;
        Ok(state.interviews.iter().find(|i| i.id == interview_id).cloned())
    }

    async fn delete_interview(&self, interview_id: Uuid) -> SchedulerResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.interviews.len();
        state.interviews.retain(|i| i.id != interview_id);
        Ok(state.interviews.len() < before)
    }
}

pub struct MemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    staged: MemoryState,
}

#[async_trait]
impl SlotStore for MemoryTransaction {
    async fn list_slots(&mut self, recruiter_id: Uuid) -> SchedulerResult<Vec<TimeSlot>> {
        Ok(MemoryState::sorted_slots(
            self.staged
                .slots
                .values()
                .filter(|slot| slot.recruiter_id == recruiter_id),
        ))
    }

    async fn get_slot(&mut self, slot_id: Uuid) -> SchedulerResult<Option<TimeSlot>> {
        Ok(self.staged.slots.get(&slot_id).cloned())
    }

    async fn create_slot(&mut self, slot: NewTimeSlot) -> SchedulerResult<TimeSlot> {
        slot.validate()?;

        if !self.staged.recruiters.iter().any(|r| r.id == slot.recruiter_id) {
            return Err(SchedulerError::NotFound(format!(
                "Recruiter with ID {} not found",
                slot.recruiter_id
            )));
        }

        let created = TimeSlot {
            id: Uuid::new_v4(),
            recruiter_id: slot.recruiter_id,
            start_time: slot.start_time,
            end_time: slot.end_time,
            timezone: slot.timezone,
            status: SlotStatus::Available,
            created_at: Utc::now(),
        };
        debug!(
            "Creating time slot: id={}, recruiter_id={}",
            created.id, created.recruiter_id
        );
        self.staged.slots.insert(created.id, created.clone());
        Ok(created)
    }

    async fn set_status(&mut self, slot_id: Uuid, status: SlotStatus) -> SchedulerResult<TimeSlot> {
        let slot = self
            .staged
            .slots
            .get_mut(&slot_id)
            .ok_or_else(|| SchedulerError::slot_not_found(slot_id))?;
        slot.status = status;
        Ok(slot.clone())
    }

    async fn compare_and_set_status(
        &mut self,
        slot_id: Uuid,
        expected: SlotStatus,
        status: SlotStatus,
    ) -> SchedulerResult<Option<TimeSlot>> {
        match self.staged.slots.get_mut(&slot_id) {
            Some(slot) if slot.status == expected => {
                slot.status = status;
                Ok(Some(slot.clone()))
            }
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl InterviewStore for MemoryTransaction {
    async fn get_interview(&mut self, interview_id: Uuid) -> SchedulerResult<Option<Interview>> {
        Ok(self
            .staged
            .interviews
            .iter()
            .find(|i| i.id == interview_id)
            .cloned())
    }

    async fn create_interview(&mut self, new: NewInterview) -> SchedulerResult<Interview> {
        if !self.recruiter_exists(new.recruiter_id).await?
            || !self.candidate_exists(new.candidate_id).await?
        {
            return Err(SchedulerError::NotFound(format!(
                "Recruiter {} or candidate {} not found",
                new.recruiter_id, new.candidate_id
            )));
        }

        if let Some(missing) = new
            .candidate_slot_ids
            .iter()
            .find(|id| !self.staged.slots.contains_key(id))
        {
            return Err(SchedulerError::slot_not_found(*missing));
        }

        let now = Utc::now();
        let mut candidate_slot_ids: Vec<Uuid> = Vec::with_capacity(new.candidate_slot_ids.len());
        for id in new.candidate_slot_ids {
            if !candidate_slot_ids.contains(&id) {
                candidate_slot_ids.push(id);
            }
        }

        let interview = Interview {
            id: Uuid::new_v4(),
            recruiter_id: new.recruiter_id,
            candidate_id: new.candidate_id,
            title: new.title,
            description: new.description,
            location: new.location,
            mode: new.mode,
            status: InterviewStatus::Scheduled,
            candidate_slot_ids,
            booked_slot_id: None,
            created_at: now,
            updated_at: now,
        };
        self.staged.interviews.push(interview.clone());
        Ok(interview)
    }

    async fn update_interview(
        &mut self,
        interview_id: Uuid,
        status: InterviewStatus,
        booked_slot_id: Option<Uuid>,
    ) -> SchedulerResult<Interview> {
        if let Some(slot_id) = booked_slot_id {
            let taken = self
                .staged
                .interviews
                .iter()
                .any(|i| i.id != interview_id && i.booked_slot_id == Some(slot_id));
            if taken {
                return Err(SchedulerError::Conflict(format!(
                    "Slot {} is already assigned to another interview",
                    slot_id
                )));
            }
        }

        let interview = self
            .staged
            .interview_mut(interview_id)
            .ok_or_else(|| SchedulerError::interview_not_found(interview_id))?;
        interview.status = status;
        interview.booked_slot_id = booked_slot_id;
        interview.updated_at = Utc::now();
        Ok(interview.clone())
    }

    async fn recruiter_exists(&mut self, recruiter_id: Uuid) -> SchedulerResult<bool> {
        Ok(self.staged.recruiters.iter().any(|r| r.id == recruiter_id))
    }

    async fn candidate_exists(&mut self, candidate_id: Uuid) -> SchedulerResult<bool> {
        Ok(self.staged.candidates.iter().any(|c| c.id == candidate_id))
    }
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn commit(&mut self) -> SchedulerResult<()> {
        *self.guard = self.staged.clone();
        Ok(())
    }
}
