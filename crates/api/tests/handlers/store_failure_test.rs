use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_api::{build_router, ApiState};
use slotbook_core::errors::SchedulerError;
use slotbook_db::mock::stores::MockStore;
use uuid::Uuid;

use crate::test_utils::test_config;

fn server_with(store: MockStore) -> TestServer {
    let state = Arc::new(ApiState::new(Arc::new(store)));
    let router = build_router(&test_config(), state).expect("router should build");
    TestServer::new(router).expect("test server should start")
}

#[test_log::test(tokio::test)]
async fn test_database_failure_is_internal_server_error() {
    let mut store = MockStore::new();
    store
        .expect_list_recruiters()
        .times(1)
        .returning(|| Err(SchedulerError::Database(eyre::eyre!("connection reset"))));
    let server = server_with(store);

    let response = server.get("/api/recruiters").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Database error: connection reset" }));
}

#[test_log::test(tokio::test)]
async fn test_slot_filter_reaches_store() {
    let recruiter_id = Uuid::new_v4();
    let mut store = MockStore::new();
    store
        .expect_list_all_slots()
        .with(eq(Some(recruiter_id)))
        .times(1)
        .returning(|_| Ok(vec![]));
    let server = server_with(store);

    let response = server
        .get("/api/slots")
        .add_query_param("recruiter_id", recruiter_id)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "slots": [] }));
}
