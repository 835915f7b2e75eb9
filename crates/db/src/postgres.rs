//! PostgreSQL backend for the scheduling store.
//!
//! Every transaction runs at `SERIALIZABLE`. Postgres reports a lost race as
//! SQLSTATE 40001, which is surfaced as `SchedulerError::Conflict`.

use std::collections::HashMap;

use async_trait::async_trait;
use slotbook_core::{
    errors::{SchedulerError, SchedulerResult},
    models::{
        interview::{Interview, InterviewStatus, NewInterview},
        time_slot::{NewTimeSlot, SlotStatus, TimeSlot},
        user::{Candidate, Recruiter},
    },
    store::{InterviewStore, SchedulingStore, SlotStore, StoreTransaction},
};
use sqlx::{PgConnection, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::{
    models::{DbInterview, DbTimeSlot},
    repositories::{
        directory,
        interview::{self, InsertInterview},
        time_slot,
    },
    DbPool,
};

const SERIALIZATION_FAILURE: &str = "40001";
const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps a repository error onto the domain taxonomy using its SQLSTATE.
pub fn map_db_error(report: eyre::Report) -> SchedulerError {
    let code = report
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|e| e.code())
        .map(|code| code.into_owned());

    match code.as_deref() {
        Some(SERIALIZATION_FAILURE) | Some(UNIQUE_VIOLATION) => SchedulerError::Conflict(format!(
            "Concurrent update rejected by the database: {}",
            report
        )),
        Some(CHECK_VIOLATION) => SchedulerError::Validation(report.to_string()),
        Some(FOREIGN_KEY_VIOLATION) => SchedulerError::NotFound(report.to_string()),
        _ => SchedulerError::Database(report),
    }
}

fn into_slots(rows: Vec<DbTimeSlot>) -> SchedulerResult<Vec<TimeSlot>> {
    let slots = rows
        .into_iter()
        .map(TimeSlot::try_from)
        .collect::<eyre::Result<Vec<_>>>()?;
    Ok(slots)
}

#[derive(Clone)]
pub struct PgSchedulingStore {
    pool: DbPool,
}

impl PgSchedulingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn attach_slot_ids(&self, rows: Vec<DbInterview>) -> SchedulerResult<Vec<Interview>> {
        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let links = interview::get_interview_slots(&self.pool, &ids)
            .await
            .map_err(map_db_error)?;

        let mut by_interview: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for link in links {
            by_interview.entry(link.interview_id).or_default().push(link.slot_id);
        }

        let interviews = rows
            .into_iter()
            .map(|row| {
                let slot_ids = by_interview.remove(&row.id).unwrap_or_default();
                row.into_interview(slot_ids)
            })
            .collect::<eyre::Result<Vec<_>>>()?;
        Ok(interviews)
    }
}

#[async_trait]
impl SchedulingStore for PgSchedulingStore {
    async fn begin(&self) -> SchedulerResult<Box<dyn StoreTransaction>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e.into()))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error(e.into()))?;

        Ok(Box::new(PgStoreTransaction { tx: Some(tx) }))
    }

    async fn list_recruiters(&self) -> SchedulerResult<Vec<Recruiter>> {
        let rows = directory::get_recruiters(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(rows.into_iter().map(Recruiter::from).collect())
    }

    async fn list_candidates(&self) -> SchedulerResult<Vec<Candidate>> {
        let rows = directory::get_candidates(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(rows.into_iter().map(Candidate::from).collect())
    }

    async fn list_all_slots(&self, recruiter_id: Option<Uuid>) -> SchedulerResult<Vec<TimeSlot>> {
        let rows = match recruiter_id {
            Some(id) => time_slot::get_time_slots_by_recruiter_id(&self.pool, id).await,
            None => time_slot::get_all_time_slots(&self.pool).await,
        }
        .map_err(map_db_error)?;
        into_slots(rows)
    }

    async fn list_interviews(&self, candidate_id: Option<Uuid>) -> SchedulerResult<Vec<Interview>> {
        let rows = interview::get_interviews(&self.pool, candidate_id)
            .await
            .map_err(map_db_error)?;
        self.attach_slot_ids(rows).await
    }

    async fn find_interview(&self, interview_id: Uuid) -> SchedulerResult<Option<Interview>> {
        let row = interview::get_interview_by_id(&self.pool, interview_id)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(row) => Ok(self.attach_slot_ids(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn delete_interview(&self, interview_id: Uuid) -> SchedulerResult<bool> {
        debug!("Deleting interview: id={}", interview_id);
        interview::delete_interview(&self.pool, interview_id)
            .await
            .map_err(map_db_error)
    }
}

/// One `SERIALIZABLE` transaction. Rolled back on drop unless committed.
pub struct PgStoreTransaction {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgStoreTransaction {
    fn conn(&mut self) -> SchedulerResult<&mut PgConnection> {
        self.tx
            .as_deref_mut()
            .ok_or_else(|| SchedulerError::Internal("transaction already committed".into()))
    }

    async fn slot_ids_for(&mut self, interview_id: Uuid) -> SchedulerResult<Vec<Uuid>> {
        let links = interview::get_interview_slots(self.conn()?, &[interview_id])
            .await
            .map_err(map_db_error)?;
        Ok(links.into_iter().map(|link| link.slot_id).collect())
    }
}

#[async_trait]
impl SlotStore for PgStoreTransaction {
    async fn list_slots(&mut self, recruiter_id: Uuid) -> SchedulerResult<Vec<TimeSlot>> {
        let rows = time_slot::get_time_slots_by_recruiter_id(self.conn()?, recruiter_id)
            .await
            .map_err(map_db_error)?;
        into_slots(rows)
    }

    async fn get_slot(&mut self, slot_id: Uuid) -> SchedulerResult<Option<TimeSlot>> {
        let row = time_slot::get_time_slot_by_id(self.conn()?, slot_id)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(TimeSlot::try_from).transpose()?)
    }

    async fn create_slot(&mut self, slot: NewTimeSlot) -> SchedulerResult<TimeSlot> {
        slot.validate()?;

        let row = time_slot::create_time_slot(
            self.conn()?,
            slot.recruiter_id,
            slot.start_time,
            slot.end_time,
            &slot.timezone,
        )
        .await
        .map_err(map_db_error)?;
        Ok(TimeSlot::try_from(row)?)
    }

    async fn set_status(&mut self, slot_id: Uuid, status: SlotStatus) -> SchedulerResult<TimeSlot> {
        let row = time_slot::update_time_slot_status(self.conn()?, slot_id, status.as_str())
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| SchedulerError::slot_not_found(slot_id))?;
        Ok(TimeSlot::try_from(row)?)
    }

    async fn compare_and_set_status(
        &mut self,
        slot_id: Uuid,
        expected: SlotStatus,
        status: SlotStatus,
    ) -> SchedulerResult<Option<TimeSlot>> {
        let row = time_slot::compare_and_set_time_slot_status(
            self.conn()?,
            slot_id,
            expected.as_str(),
            status.as_str(),
        )
        .await
        .map_err(map_db_error)?;

        if row.is_none() {
            debug!(
                "Conditional status update matched no rows: slot_id={}, expected={}",
                slot_id, expected
            );
        }
        Ok(row.map(TimeSlot::try_from).transpose()?)
    }
}

#[async_trait]
impl InterviewStore for PgStoreTransaction {
    async fn get_interview(&mut self, interview_id: Uuid) -> SchedulerResult<Option<Interview>> {
        let row = interview::get_interview_by_id(self.conn()?, interview_id)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(row) => {
                let slot_ids = self.slot_ids_for(interview_id).await?;
                Ok(Some(row.into_interview(slot_ids)?))
            }
            None => Ok(None),
        }
    }

    async fn create_interview(&mut self, new: NewInterview) -> SchedulerResult<Interview> {
        let row = interview::create_interview(
            self.conn()?,
            InsertInterview {
                recruiter_id: new.recruiter_id,
                candidate_id: new.candidate_id,
                title: &new.title,
                description: new.description.as_deref(),
                location: new.location.as_deref(),
                mode: new.mode.as_str(),
            },
        )
        .await
        .map_err(map_db_error)?;

        for slot_id in &new.candidate_slot_ids {
            interview::add_interview_slot(self.conn()?, row.id, *slot_id)
                .await
                .map_err(map_db_error)?;
        }

        Ok(row.into_interview(new.candidate_slot_ids)?)
    }

    async fn update_interview(
        &mut self,
        interview_id: Uuid,
        status: InterviewStatus,
        booked_slot_id: Option<Uuid>,
    ) -> SchedulerResult<Interview> {
        let row = interview::update_interview_booking(
            self.conn()?,
            interview_id,
            status.as_str(),
            booked_slot_id,
        )
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| SchedulerError::interview_not_found(interview_id))?;

        let slot_ids = self.slot_ids_for(interview_id).await?;
        Ok(row.into_interview(slot_ids)?)
    }

    async fn recruiter_exists(&mut self, recruiter_id: Uuid) -> SchedulerResult<bool> {
        directory::recruiter_exists(self.conn()?, recruiter_id)
            .await
            .map_err(map_db_error)
    }

    async fn candidate_exists(&mut self, candidate_id: Uuid) -> SchedulerResult<bool> {
        directory::candidate_exists(self.conn()?, candidate_id)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl StoreTransaction for PgStoreTransaction {
    async fn commit(&mut self) -> SchedulerResult<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| SchedulerError::Internal("transaction already committed".into()))?;
        tx.commit().await.map_err(|e| map_db_error(e.into()))
    }
}
