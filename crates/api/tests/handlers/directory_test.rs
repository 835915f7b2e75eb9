use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use slotbook_core::models::{
    interview::ListInterviewsResponse,
    user::{ListCandidatesResponse, ListRecruitersResponse},
};
use uuid::Uuid;

use crate::test_utils::TestContext;

#[test_log::test(tokio::test)]
async fn test_list_recruiters_nests_user() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/recruiters").await;

    response.assert_status_ok();
    let body: ListRecruitersResponse = response.json();
    assert_eq!(body.recruiters, vec![ctx.recruiter.clone()]);
}

#[test_log::test(tokio::test)]
async fn test_list_candidates() {
    let ctx = TestContext::new();

    let body: ListCandidatesResponse = ctx.server.get("/api/candidates").await.json();

    assert_eq!(body.candidates, vec![ctx.candidate.clone()]);
}

#[test_log::test(tokio::test)]
async fn test_candidate_interviews() {
    let ctx = TestContext::new();
    ctx.server
        .post("/api/interviews")
        .json(&json!({
            "recruiter_id": ctx.recruiter.id,
            "candidate_id": ctx.candidate.id,
            "title": "Intro call",
            "mode": "PHONE"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: ListInterviewsResponse = ctx
        .server
        .get(&format!("/api/candidates/{}/interviews", ctx.candidate.id))
        .await
        .json();

    assert_eq!(body.interviews.len(), 1);
    assert_eq!(body.interviews[0].interview.title, "Intro call");
}

#[test_log::test(tokio::test)]
async fn test_unknown_candidate_interviews_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&format!("/api/candidates/{}/interviews", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_health_and_version() {
    let ctx = TestContext::new();

    ctx.server.get("/health").await.assert_json(&json!({ "status": "ok" }));
    ctx.server.get("/version").await.assert_status_ok();
}
