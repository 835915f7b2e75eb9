use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use serde_test::{assert_tokens, Token};
use slotbook_core::{
    errors::SchedulerError,
    models::{
        interview::{
            CreateInterviewRequest, Interview, InterviewDetails, InterviewMode, InterviewStatus,
            NewInterview,
        },
        time_slot::{CreateTimeSlotRequest, NewTimeSlot, SlotStatus, TimeSlot},
        user::{Candidate, Recruiter, User},
    },
};
use uuid::Uuid;

fn sample_slot() -> TimeSlot {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap();
    TimeSlot {
        id: Uuid::new_v4(),
        recruiter_id: Uuid::new_v4(),
        start_time: start,
        end_time: start + chrono::Duration::hours(1),
        timezone: "America/New_York".to_string(),
        status: SlotStatus::Available,
        created_at: start,
    }
}

fn sample_interview(status: InterviewStatus) -> Interview {
    let now = Utc::now();
    Interview {
        id: Uuid::new_v4(),
        recruiter_id: Uuid::new_v4(),
        candidate_id: Uuid::new_v4(),
        title: "Backend interview".to_string(),
        description: None,
        location: Some("Zoom".to_string()),
        mode: InterviewMode::Video,
        status,
        candidate_slot_ids: vec![],
        booked_slot_id: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_slot_status_tokens() {
    assert_tokens(
        &SlotStatus::Available,
        &[Token::UnitVariant {
            name: "SlotStatus",
            variant: "AVAILABLE",
        }],
    );
    assert_tokens(
        &SlotStatus::Booked,
        &[Token::UnitVariant {
            name: "SlotStatus",
            variant: "BOOKED",
        }],
    );
}

#[test]
fn test_interview_mode_tokens() {
    assert_tokens(
        &InterviewMode::InPerson,
        &[Token::UnitVariant {
            name: "InterviewMode",
            variant: "IN_PERSON",
        }],
    );
}

#[rstest]
#[case("SCHEDULED", InterviewStatus::Scheduled)]
#[case("CONFIRMED", InterviewStatus::Confirmed)]
#[case("COMPLETED", InterviewStatus::Completed)]
#[case("CANCELLED", InterviewStatus::Cancelled)]
#[case("RESCHEDULED", InterviewStatus::Rescheduled)]
fn test_interview_status_text_matches_wire(#[case] text: &str, #[case] status: InterviewStatus) {
    assert_eq!(text.parse::<InterviewStatus>().unwrap(), status);
    assert_eq!(status.to_string(), text);
    assert_eq!(to_value(status).unwrap(), json!(text));
}

#[test]
fn test_unknown_enum_text_is_a_validation_error() {
    assert!(matches!(
        "PENDING".parse::<SlotStatus>(),
        Err(SchedulerError::Validation(_))
    ));
    assert!(matches!(
        "CARRIER_PIGEON".parse::<InterviewMode>(),
        Err(SchedulerError::Validation(_))
    ));
}

#[rstest]
#[case(InterviewStatus::Scheduled, InterviewStatus::Confirmed, true)]
#[case(InterviewStatus::Scheduled, InterviewStatus::Cancelled, true)]
#[case(InterviewStatus::Scheduled, InterviewStatus::Completed, false)]
#[case(InterviewStatus::Rescheduled, InterviewStatus::Confirmed, true)]
#[case(InterviewStatus::Confirmed, InterviewStatus::Completed, true)]
#[case(InterviewStatus::Confirmed, InterviewStatus::Cancelled, true)]
#[case(InterviewStatus::Confirmed, InterviewStatus::Scheduled, false)]
#[case(InterviewStatus::Completed, InterviewStatus::Cancelled, false)]
#[case(InterviewStatus::Cancelled, InterviewStatus::Scheduled, false)]
#[case(InterviewStatus::Cancelled, InterviewStatus::Confirmed, false)]
fn test_interview_state_machine(
    #[case] from: InterviewStatus,
    #[case] to: InterviewStatus,
    #[case] allowed: bool,
) {
    assert_eq!(from.can_transition_to(to), allowed);
}

#[test]
fn test_terminal_states_have_no_exit() {
    let all = [
        InterviewStatus::Scheduled,
        InterviewStatus::Confirmed,
        InterviewStatus::Completed,
        InterviewStatus::Cancelled,
        InterviewStatus::Rescheduled,
    ];
    for from in all.iter().filter(|s| s.is_terminal()) {
        assert!(all.iter().all(|to| !from.can_transition_to(*to)));
    }
}

#[test]
fn test_bookable_statuses_are_exactly_those_that_confirm() {
    let all = [
        InterviewStatus::Scheduled,
        InterviewStatus::Confirmed,
        InterviewStatus::Completed,
        InterviewStatus::Cancelled,
        InterviewStatus::Rescheduled,
    ];
    for status in all {
        assert_eq!(
            status.is_bookable(),
            status.can_transition_to(InterviewStatus::Confirmed),
            "{status}"
        );
    }
}

#[test]
fn test_create_time_slot_request_normalizes_offsets() {
    let recruiter_id = Uuid::new_v4();
    let body = json!({
        "recruiter_id": recruiter_id,
        "start_time": "2024-01-01T09:00:00-05:00",
        "end_time": "2024-01-01T10:00:00-05:00",
        "timezone": "America/New_York"
    });

    let request: CreateTimeSlotRequest = serde_json::from_value(body).unwrap();
    let slot = NewTimeSlot::from(request);

    let expected: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap();
    assert_eq!(slot.start_time, expected);
    assert_eq!(slot.recruiter_id, recruiter_id);
    assert_eq!(slot.timezone, "America/New_York");
}

#[test]
fn test_create_time_slot_request_defaults_to_utc() {
    let request: CreateTimeSlotRequest = from_str(&format!(
        r#"{{"recruiter_id":"{}","start_time":"2024-01-01T14:00:00Z","end_time":"2024-01-01T15:00:00Z"}}"#,
        Uuid::new_v4()
    ))
    .unwrap();

    assert_eq!(request.timezone, "UTC");
}

#[rstest]
#[case(0, "UTC", false)]
#[case(-30, "UTC", false)]
#[case(30, "Not/AZone", false)]
#[case(30, "Europe/London", true)]
fn test_new_time_slot_validation(
    #[case] minutes: i64,
    #[case] timezone: &str,
    #[case] valid: bool,
) {
    let start = Utc.with_ymd_and_hms(2024, 3, 31, 0, 30, 0).unwrap();
    let slot = NewTimeSlot::new(
        Uuid::new_v4(),
        start,
        start + chrono::Duration::minutes(minutes),
        timezone,
    );

    match slot.validate() {
        Ok(interval) => {
            assert!(valid);
            assert_eq!(interval.start, start);
        }
        Err(SchedulerError::Validation(_)) => assert!(!valid),
        Err(e) => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[test]
fn test_create_interview_request_into_new_interview() {
    let slot_id = Uuid::new_v4();
    let request: CreateInterviewRequest = serde_json::from_value(json!({
        "recruiter_id": Uuid::new_v4(),
        "candidate_id": Uuid::new_v4(),
        "title": "System design",
        "description": "Second round",
        "location": null,
        "mode": "PHONE",
        "candidate_slot_ids": [slot_id]
    }))
    .unwrap();

    let interview = NewInterview::from(request);

    assert_eq!(interview.mode, InterviewMode::Phone);
    assert_eq!(interview.candidate_slot_ids, vec![slot_id]);
    assert_eq!(interview.location, None);
}

#[test]
fn test_interview_details_flattens_interview_fields() {
    let slot = sample_slot();
    let mut interview = sample_interview(InterviewStatus::Confirmed);
    interview.candidate_slot_ids = vec![slot.id];
    interview.booked_slot_id = Some(slot.id);

    let user = User {
        id: Uuid::new_v4(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        timezone: "America/New_York".to_string(),
    };
    let details = InterviewDetails {
        interview: interview.clone(),
        candidate_slots: vec![slot.clone()],
        booked_slot: Some(slot.clone()),
        recruiter: Some(Recruiter {
            id: interview.recruiter_id,
            user: user.clone(),
            company: "Tech Corp".to_string(),
            title: Some("HR Manager".to_string()),
        }),
        candidate: Some(Candidate {
            id: interview.candidate_id,
            user,
            phone: None,
        }),
    };

    let value = to_value(&details).unwrap();

    assert_eq!(value["id"], json!(interview.id));
    assert_eq!(value["status"], json!("CONFIRMED"));
    assert_eq!(value["booked_slot"]["id"], json!(slot.id));
    assert_eq!(value["recruiter"]["user"]["name"], json!("Alice"));
    assert_eq!(value["candidate_slots"].as_array().unwrap().len(), 1);
}

#[test]
fn test_interview_offers_slot() {
    let offered = Uuid::new_v4();
    let mut interview = sample_interview(InterviewStatus::Scheduled);
    interview.candidate_slot_ids = vec![offered];

    assert!(interview.offers_slot(offered));
    assert!(!interview.offers_slot(Uuid::new_v4()));
}
