use std::collections::HashMap;

use slotbook_core::{
    errors::SchedulerResult,
    models::{
        interview::{Interview, InterviewDetails},
        time_slot::TimeSlot,
        user::{Candidate, Recruiter},
    },
    store::SchedulingStore,
};
use uuid::Uuid;

/// Lookup tables used to expand interviews into [`InterviewDetails`].
pub struct DetailsContext {
    slots: HashMap<Uuid, TimeSlot>,
    recruiters: HashMap<Uuid, Recruiter>,
    candidates: HashMap<Uuid, Candidate>,
}

impl DetailsContext {
    pub async fn load(store: &dyn SchedulingStore) -> SchedulerResult<Self> {
        let slots = store
            .list_all_slots(None)
            .await?
            .into_iter()
            .map(|slot| (slot.id, slot))
            .collect();
        let recruiters = store
            .list_recruiters()
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();
        let candidates = store
            .list_candidates()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(Self {
            slots,
            recruiters,
            candidates,
        })
    }

    pub fn expand(&self, interview: Interview) -> InterviewDetails {
        let candidate_slots = interview
            .candidate_slot_ids
            .iter()
            .filter_map(|id| self.slots.get(id).cloned())
            .collect();
        let booked_slot = interview
            .booked_slot_id
            .and_then(|id| self.slots.get(&id).cloned());

        InterviewDetails {
            candidate_slots,
            booked_slot,
            recruiter: self.recruiters.get(&interview.recruiter_id).cloned(),
            candidate: self.candidates.get(&interview.candidate_id).cloned(),
            interview,
        }
    }

    pub fn candidate_exists(&self, candidate_id: Uuid) -> bool {
        self.candidates.contains_key(&candidate_id)
    }
}

pub async fn interview_details(
    store: &dyn SchedulingStore,
    interview: Interview,
) -> SchedulerResult<InterviewDetails> {
    Ok(DetailsContext::load(store).await?.expand(interview))
}
