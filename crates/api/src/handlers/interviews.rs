use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use slotbook_core::{
    errors::SchedulerError,
    models::interview::{
        BookSlotRequest, CreateInterviewRequest, DeleteInterviewResponse, InterviewResponse,
        ListInterviewsResponse, UpdateInterviewStatusRequest,
    },
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    handlers::details::{interview_details, DetailsContext},
    middleware::error_handling::AppError,
    ApiState,
};

#[axum::debug_handler]
pub async fn list_interviews(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListInterviewsResponse>, AppError> {
    let interviews = state.store.list_interviews(None).await?;
    let context = DetailsContext::load(state.store.as_ref()).await?;

    Ok(Json(ListInterviewsResponse {
        interviews: interviews.into_iter().map(|i| context.expand(i)).collect(),
    }))
}

#[axum::debug_handler]
pub async fn create_interview(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewResponse>), AppError> {
    let interview = state.coordinator.create_interview(payload.into()).await?;

    info!(
        "Created interview {} for candidate {} with {} offered slots",
        interview.id,
        interview.candidate_id,
        interview.candidate_slot_ids.len()
    );

    let interview = interview_details(state.store.as_ref(), interview).await?;
    Ok((StatusCode::CREATED, Json(InterviewResponse { interview })))
}

#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewResponse>, AppError> {
    let interview = state
        .store
        .find_interview(id)
        .await?
        .ok_or_else(|| SchedulerError::interview_not_found(id))?;

    let interview = interview_details(state.store.as_ref(), interview).await?;
    Ok(Json(InterviewResponse { interview }))
}

#[axum::debug_handler]
pub async fn delete_interview(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteInterviewResponse>, AppError> {
    if !state.store.delete_interview(id).await? {
        return Err(SchedulerError::interview_not_found(id).into());
    }

    info!("Deleted interview {}", id);

    Ok(Json(DeleteInterviewResponse {
        message: "Interview deleted successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let interview = state.coordinator.book_slot(id, payload.slot_id).await?;

    info!("Booked slot {} for interview {}", payload.slot_id, id);

    let interview = interview_details(state.store.as_ref(), interview).await?;
    Ok(Json(InterviewResponse { interview }))
}

#[axum::debug_handler]
pub async fn update_interview_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewStatusRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let interview = state
        .coordinator
        .transition_interview(id, payload.status)
        .await?;

    info!("Interview {} is now {}", id, interview.status);

    let interview = interview_details(state.store.as_ref(), interview).await?;
    Ok(Json(InterviewResponse { interview }))
}
