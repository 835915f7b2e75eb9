use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_core::models::{
    interview::{InterviewResponse, InterviewStatus, ListInterviewsResponse},
    time_slot::{CreateTimeSlotResponse, SlotStatus, TimeSlot},
};
use uuid::Uuid;

use crate::test_utils::TestContext;

async fn propose(ctx: &TestContext, start: &str, end: &str) -> TimeSlot {
    let response: CreateTimeSlotResponse = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "start_time": start,
            "end_time": end
        }))
        .await
        .json();
    response.slot
}

async fn create_interview(ctx: &TestContext, slot_ids: &[Uuid]) -> InterviewResponse {
    let response = ctx
        .server
        .post("/api/interviews")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "candidate_id": ctx.candidate.id,
            "title": "System design",
            "mode": "VIDEO",
            "candidate_slot_ids": slot_ids
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

#[test_log::test(tokio::test)]
async fn test_create_interview_embeds_details() {
    let ctx = TestContext::new();
    let slot = propose(&ctx, "2024-06-03T10:00:00Z", "2024-06-03T11:00:00Z").await;

    let created = create_interview(&ctx, &[slot.id]).await.interview;

    assert_eq!(created.interview.status, InterviewStatus::Scheduled);
    assert_eq!(created.candidate_slots, vec![slot]);
    assert_eq!(created.booked_slot, None);
    assert_eq!(created.recruiter, Some(ctx.recruiter.clone()));
    assert_eq!(created.candidate, Some(ctx.candidate.clone()));
}

#[test_log::test(tokio::test)]
async fn test_book_slot_end_to_end() {
    let ctx = TestContext::new();
    let slot = propose(&ctx, "2024-06-03T10:00:00Z", "2024-06-03T11:00:00Z").await;
    let interview = create_interview(&ctx, &[slot.id]).await.interview.interview;

    let response = ctx
        .server
        .post(&format!("/api/interviews/{}/book", interview.id))
        .json(&json!({ "slot_id": slot.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let booked: InterviewResponse = response.json();
    assert_eq!(booked.interview.interview.status, InterviewStatus::Confirmed);
    let booked_slot = booked.interview.booked_slot.unwrap();
    assert_eq!(booked_slot.id, slot.id);
    assert_eq!(booked_slot.status, SlotStatus::Booked);
}

#[test_log::test(tokio::test)]
async fn test_second_booking_is_conflict() {
    let ctx = TestContext::new();
    let slot = propose(&ctx, "2024-06-03T10:00:00Z", "2024-06-03T11:00:00Z").await;
    let first = create_interview(&ctx, &[slot.id]).await.interview.interview;
    let second = create_interview(&ctx, &[slot.id]).await.interview.interview;

    ctx.server
        .post(&format!("/api/interviews/{}/book", first.id))
        .json(&json!({ "slot_id": slot.id }))
        .await
        .assert_status_ok();

    let response = ctx
        .server
        .post(&format!("/api/interviews/{}/book", second.id))
        .json(&json!({ "slot_id": slot.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        format!("Slot {} is already booked", slot.id)
    );

    let second: InterviewResponse = ctx
        .server
        .get(&format!("/api/interviews/{}", second.id))
        .await
        .json();
    assert_eq!(second.interview.interview.status, InterviewStatus::Scheduled);
}

#[test_log::test(tokio::test)]
async fn test_get_unknown_interview_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&format!("/api/interviews/{}", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_status_transitions() {
    let ctx = TestContext::new();
    let slot = propose(&ctx, "2024-06-03T10:00:00Z", "2024-06-03T11:00:00Z").await;
    let interview = create_interview(&ctx, &[slot.id]).await.interview.interview;

    let premature = ctx
        .server
        .put(&format!("/api/interviews/{}/status", interview.id))
        .json(&json!({ "status": "COMPLETED" }))
        .await;
    assert_eq!(premature.status_code(), StatusCode::BAD_REQUEST);

    ctx.server
        .post(&format!("/api/interviews/{}/book", interview.id))
        .json(&json!({ "slot_id": slot.id }))
        .await
        .assert_status_ok();

    let completed: InterviewResponse = ctx
        .server
        .put(&format!("/api/interviews/{}/status", interview.id))
        .json(&json!({ "status": "COMPLETED" }))
        .await
        .json();
    assert_eq!(completed.interview.interview.status, InterviewStatus::Completed);
}

#[test_log::test(tokio::test)]
async fn test_delete_interview() {
    let ctx = TestContext::new();
    let interview = create_interview(&ctx, &[]).await.interview.interview;
    let path = format!("/api/interviews/{}", interview.id);

    let response = ctx.server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Interview deleted successfully");

    assert_eq!(ctx.server.delete(&path).await.status_code(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_list_interviews() {
    let ctx = TestContext::new();
    create_interview(&ctx, &[]).await;
    create_interview(&ctx, &[]).await;

    let listed: ListInterviewsResponse = ctx.server.get("/api/interviews").await.json();

    assert_eq!(listed.interviews.len(), 2);
}
