use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use slotbook_core::models::time_slot::{
    CreateTimeSlotRequest, CreateTimeSlotResponse, ListTimeSlotsResponse,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct SlotFilter {
    pub recruiter_id: Option<Uuid>,
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(filter): Query<SlotFilter>,
) -> Result<Json<ListTimeSlotsResponse>, AppError> {
    let slots = state.store.list_all_slots(filter.recruiter_id).await?;

    Ok(Json(ListTimeSlotsResponse { slots }))
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateTimeSlotRequest>,
) -> Result<(StatusCode, Json<CreateTimeSlotResponse>), AppError> {
    let slot = state.coordinator.propose_slot(payload.into()).await?;

    info!(
        "Proposed slot {} for recruiter {} ({} - {})",
        slot.id, slot.recruiter_id, slot.start_time, slot.end_time
    );

    Ok((StatusCode::CREATED, Json(CreateTimeSlotResponse { slot })))
}
