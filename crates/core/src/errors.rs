use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Slot {0} is already booked")]
    AlreadyBooked(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl SchedulerError {
    pub fn slot_not_found(id: Uuid) -> Self {
        SchedulerError::NotFound(format!("Time slot with ID {} not found", id))
    }

    pub fn interview_not_found(id: Uuid) -> Self {
        SchedulerError::NotFound(format!("Interview with ID {} not found", id))
    }
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
