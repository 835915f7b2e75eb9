use axum::{
    extract::{Path, State},
    Json,
};
use slotbook_core::{
    errors::SchedulerError,
    models::{
        interview::ListInterviewsResponse,
        user::{ListCandidatesResponse, ListRecruitersResponse},
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{handlers::details::DetailsContext, middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_recruiters(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListRecruitersResponse>, AppError> {
    let recruiters = state.store.list_recruiters().await?;

    Ok(Json(ListRecruitersResponse { recruiters }))
}

#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListCandidatesResponse>, AppError> {
    let candidates = state.store.list_candidates().await?;

    Ok(Json(ListCandidatesResponse { candidates }))
}

/// Interviews of one candidate, as seen from the candidate's portal.
#[axum::debug_handler]
pub async fn candidate_interviews(
    State(state): State<Arc<ApiState>>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<ListInterviewsResponse>, AppError> {
    let context = DetailsContext::load(state.store.as_ref()).await?;
    if !context.candidate_exists(candidate_id) {
        return Err(SchedulerError::NotFound(format!(
            "Candidate with ID {} not found",
            candidate_id
        ))
        .into());
    }

    let interviews = state.store.list_interviews(Some(candidate_id)).await?;

    Ok(Json(ListInterviewsResponse {
        interviews: interviews.into_iter().map(|i| context.expand(i)).collect(),
    }))
}
