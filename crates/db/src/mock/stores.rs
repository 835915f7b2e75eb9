use async_trait::async_trait;
use mockall::mock;
use slotbook_core::{
    errors::SchedulerResult,
    models::{
        interview::{Interview, InterviewStatus, NewInterview},
        time_slot::{NewTimeSlot, SlotStatus, TimeSlot},
        user::{Candidate, Recruiter},
    },
    store::{InterviewStore, SchedulingStore, SlotStore, StoreTransaction},
};
use uuid::Uuid;

// Mock store backends for testing the coordinator and handlers
mock! {
    pub Store {}

    #[async_trait]
    impl SchedulingStore for Store {
        async fn begin(&self) -> SchedulerResult<Box<dyn StoreTransaction>>;
        async fn list_recruiters(&self) -> SchedulerResult<Vec<Recruiter>>;
        async fn list_candidates(&self) -> SchedulerResult<Vec<Candidate>>;
        async fn list_all_slots(&self, recruiter_id: Option<Uuid>) -> SchedulerResult<Vec<TimeSlot>>;
        async fn list_interviews(&self, candidate_id: Option<Uuid>) -> SchedulerResult<Vec<Interview>>;
        async fn find_interview(&self, interview_id: Uuid) -> SchedulerResult<Option<Interview>>;
        async fn delete_interview(&self, interview_id: Uuid) -> SchedulerResult<bool>;
    }
}

mock! {
    pub Transaction {}

    #[async_trait]
    impl SlotStore for Transaction {
        async fn list_slots(&mut self, recruiter_id: Uuid) -> SchedulerResult<Vec<TimeSlot>>;
        async fn get_slot(&mut self, slot_id: Uuid) -> SchedulerResult<Option<TimeSlot>>;
        async fn create_slot(&mut self, slot: NewTimeSlot) -> SchedulerResult<TimeSlot>;
        async fn set_status(&mut self, slot_id: Uuid, status: SlotStatus) -> SchedulerResult<TimeSlot>;
        async fn compare_and_set_status(
            &mut self,
            slot_id: Uuid,
            expected: SlotStatus,
            status: SlotStatus,
        ) -> SchedulerResult<Option<TimeSlot>>;
    }

    #[async_trait]
    impl InterviewStore for Transaction {
        async fn get_interview(&mut self, interview_id: Uuid) -> SchedulerResult<Option<Interview>>;
        async fn create_interview(&mut self, interview: NewInterview) -> SchedulerResult<Interview>;
        async fn update_interview(
            &mut self,
            interview_id: Uuid,
            status: InterviewStatus,
            booked_slot_id: Option<Uuid>,
        ) -> SchedulerResult<Interview>;
        async fn recruiter_exists(&mut self, recruiter_id: Uuid) -> SchedulerResult<bool>;
        async fn candidate_exists(&mut self, candidate_id: Uuid) -> SchedulerResult<bool>;
    }

    #[async_trait]
    impl StoreTransaction for Transaction {
        async fn commit(&mut self) -> SchedulerResult<()>;
    }
}
