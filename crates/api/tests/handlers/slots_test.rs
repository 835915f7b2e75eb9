use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_core::models::time_slot::{
    CreateTimeSlotResponse, ListTimeSlotsResponse, SlotStatus,
};
use uuid::Uuid;

use crate::test_utils::TestContext;

#[test_log::test(tokio::test)]
async fn test_create_slot_returns_created() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "start_time": "2024-06-03T09:00:00-05:00",
            "end_time": "2024-06-03T10:00:00-05:00",
            "timezone": "America/Chicago"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: CreateTimeSlotResponse = response.json();
    assert_eq!(body.slot.status, SlotStatus::Available);
    assert_eq!(body.slot.start_time.to_rfc3339(), "2024-06-03T14:00:00+00:00");
    assert_eq!(body.slot.timezone, "America/Chicago");
}

#[test_log::test(tokio::test)]
async fn test_create_slot_inverted_range_is_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "start_time": "2024-06-03T10:00:00Z",
            "end_time": "2024-06-03T10:00:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));

    let listed: ListTimeSlotsResponse = ctx.server.get("/api/slots").await.json();
    assert!(listed.slots.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_cross_timezone_overlap_is_conflict() {
    let ctx = TestContext::new();

    let first = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "start_time": "2024-06-03T09:00:00-05:00",
            "end_time": "2024-06-03T10:00:00-05:00"
        }))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "start_time": "2024-06-03T14:00:00Z",
            "end_time": "2024-06-03T15:00:00Z"
        }))
        .await;

    assert_eq!(second.status_code(), StatusCode::CONFLICT);
}

#[test_log::test(tokio::test)]
async fn test_abutting_slots_are_accepted() {
    let ctx = TestContext::new();

    for (start, end) in [
        ("2024-06-03T10:00:00Z", "2024-06-03T11:00:00Z"),
        ("2024-06-03T11:00:00Z", "2024-06-03T12:00:00Z"),
    ] {
        let response = ctx
            .server
            .post("/api/slots")
            .json(&json!({
                "recruiter_id": ctx.recruiter.id,
                "start_time": start,
                "end_time": end
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let listed: ListTimeSlotsResponse = ctx
        .server
        .get("/api/slots")
        .add_query_param("recruiter_id", ctx.recruiter.id)
        .await
        .json();
    assert_eq!(listed.slots.len(), 2);
}

#[test_log::test(tokio::test)]
async fn test_list_slots_filters_by_recruiter() {
    let ctx = TestContext::new();
    ctx.server
        .post("/api/slots")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "start_time": "2024-06-03T10:00:00Z",
            "end_time": "2024-06-03T11:00:00Z"
        }))
        .await;

    let listed: ListTimeSlotsResponse = ctx
        .server
        .get("/api/slots")
        .add_query_param("recruiter_id", Uuid::new_v4())
        .await
        .json();

    assert!(listed.slots.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_create_slot_unknown_recruiter_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "recruiter_id": Uuid::new_v4(),
            "start_time": "2024-06-03T10:00:00Z",
            "end_time": "2024-06-03T11:00:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
