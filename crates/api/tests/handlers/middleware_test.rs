use axum::{http::StatusCode, response::IntoResponse};
use rstest::rstest;
use slotbook_api::middleware::error_handling::AppError;
use slotbook_core::errors::SchedulerError;
use uuid::Uuid;

#[rstest]
#[case::not_found(SchedulerError::NotFound("missing".into()), StatusCode::NOT_FOUND)]
#[case::validation(SchedulerError::Validation("bad".into()), StatusCode::BAD_REQUEST)]
#[case::conflict(SchedulerError::Conflict("overlap".into()), StatusCode::CONFLICT)]
#[case::already_booked(SchedulerError::AlreadyBooked(Uuid::nil()), StatusCode::CONFLICT)]
#[case::database(SchedulerError::Database(eyre::eyre!("down")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: SchedulerError, #[case] expected: StatusCode) {
    assert_eq!(AppError(error).into_response().status(), expected);
}

#[test]
fn test_internal_error_is_server_error() {
    let error = SchedulerError::Internal(Box::new(std::io::Error::other("Internal error")));

    assert_eq!(
        AppError(error).into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_eyre_report_becomes_database_error() {
    let error: AppError = eyre::eyre!("connection refused").into();

    assert!(matches!(error.0, SchedulerError::Database(_)));
}
