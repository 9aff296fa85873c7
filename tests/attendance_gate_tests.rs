use chrono::NaiveDateTime;
use hrdesk::core::attendance::{AttendanceGate, PunchIntent};
use hrdesk::device::location::{LocationProvider, Permission};
use hrdesk::errors::AppError;
use hrdesk::session::SessionContext;
use hrdesk::session::store::MemoryStore;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

mod common;
use common::{FakeAttendance, FakeLocation, record, signed_in_session};

fn now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-06-18 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

fn desktop() -> Arc<dyn LocationProvider> {
    Arc::new(FakeLocation::desktop())
}

#[test]
fn test_intent_follows_session_clock() {
    let empty = record("2025-06-18", &[]);
    assert_eq!(PunchIntent::for_record(&empty, now()), PunchIntent::CheckIn);

    let closed = record("2025-06-18", &[("08:00:00", Some("09:00:00"))]);
    assert_eq!(PunchIntent::for_record(&closed, now()), PunchIntent::CheckIn);

    let open = record("2025-06-18", &[("09:00:00", None)]);
    assert_eq!(PunchIntent::for_record(&open, now()), PunchIntent::CheckOut);

    // opened in the same second: clock still at zero
    let just_now = record("2025-06-18", &[("10:00:00", None)]);
    assert_eq!(PunchIntent::for_record(&just_now, now()), PunchIntent::CheckIn);
}

#[test]
fn test_no_logs_sends_check_in_and_refreshes() {
    let session = signed_in_session(Some(1));
    let mut api = FakeAttendance::with_record(record("2025-06-18", &[]));
    api.after_punch = Some(record("2025-06-18", &[("10:00:00", None)]));

    let gate = AttendanceGate::new(&api, &session, desktop());
    let outcome = gate.perform(now()).unwrap();

    assert_eq!(outcome.intent, PunchIntent::CheckIn);
    assert_eq!(outcome.message, "Timer updated");
    assert_eq!(api.punches(), vec!["check_in"]);
    assert_eq!(api.calls(), vec!["day", "check_in", "day"]);
    assert!(outcome.record.unwrap().is_checked_in());
}

#[test]
fn test_running_session_sends_check_out() {
    let session = signed_in_session(Some(1));
    let api = FakeAttendance::with_record(record("2025-06-18", &[("08:30:00", None)]));

    let gate = AttendanceGate::new(&api, &session, desktop());
    let outcome = gate.perform(now()).unwrap();

    assert_eq!(outcome.intent, PunchIntent::CheckOut);
    assert_eq!(api.punches(), vec!["check_out"]);
}

#[test]
fn test_non_mobile_omits_coordinates() {
    let session = signed_in_session(Some(1));
    let api = FakeAttendance::with_record(record("2025-06-18", &[]));
    let location = Arc::new(FakeLocation::desktop());

    let gate = AttendanceGate::new(&api, &session, location.clone());
    gate.perform(now()).unwrap();

    let sent = api.requests.lock().unwrap()[0].clone();
    assert_eq!(sent.latitude, None);
    assert_eq!(sent.longitude, None);
    assert!(!sent.is_mobile_check_in);
    assert_eq!(location.asked.load(Ordering::SeqCst), 0);

    let body = serde_json::to_value(&sent).unwrap();
    assert_eq!(body, serde_json::json!({ "isMobileCheckIn": false }));
}

#[test]
fn test_mobile_attaches_coordinates() {
    let session = signed_in_session(Some(1));
    let api = FakeAttendance::with_record(record("2025-06-18", &[]));
    let gate = AttendanceGate::new(&api, &session, Arc::new(FakeLocation::mobile(45.5, -73.6)));

    gate.perform(now()).unwrap();

    let sent = api.requests.lock().unwrap()[0].clone();
    assert_eq!(sent.latitude, Some(45.5));
    assert_eq!(sent.longitude, Some(-73.6));
    assert!(sent.is_mobile_check_in);
}

#[test]
fn test_permission_denied_sends_nothing() {
    let session = signed_in_session(Some(1));
    let api = FakeAttendance::with_record(record("2025-06-18", &[]));
    let location = FakeLocation {
        permission: Permission::Denied,
        ..FakeLocation::mobile(1.0, 2.0)
    };
    let gate = AttendanceGate::new(&api, &session, Arc::new(location));

    let err = gate.perform(now()).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied));
    assert!(api.punches().is_empty());
}

#[test]
fn test_location_timeout_is_unavailable() {
    let session = signed_in_session(Some(1));
    let api = FakeAttendance::with_record(record("2025-06-18", &[]));
    let location = FakeLocation {
        delay: Duration::from_millis(800),
        timeout: Duration::from_millis(50),
        ..FakeLocation::mobile(1.0, 2.0)
    };
    let gate = AttendanceGate::new(&api, &session, Arc::new(location));

    let err = gate.perform(now()).unwrap_err();
    assert!(matches!(err, AppError::LocationUnavailable(_)));
    assert!(api.punches().is_empty());
}

#[test]
fn test_location_failure_is_unavailable() {
    let session = signed_in_session(Some(1));
    let api = FakeAttendance::with_record(record("2025-06-18", &[]));
    let location = FakeLocation {
        coords: None,
        ..FakeLocation::mobile(0.0, 0.0)
    };
    let gate = AttendanceGate::new(&api, &session, Arc::new(location));

    assert!(matches!(
        gate.perform(now()),
        Err(AppError::LocationUnavailable(_))
    ));
}

#[test]
fn test_request_failure_is_reported_once() {
    let session = signed_in_session(Some(1));
    let mut api = FakeAttendance::with_record(record("2025-06-18", &[]));
    api.punch_error = Some(|| AppError::Network("connection reset".into()));

    let gate = AttendanceGate::new(&api, &session, desktop());
    let err = gate.perform(now()).unwrap_err();

    assert!(matches!(err, AppError::PunchFailed(_)));
    assert_eq!(api.punches().len(), 1);
}

#[test]
fn test_unauthorized_is_passed_through() {
    let session = signed_in_session(Some(1));
    let mut api = FakeAttendance::with_record(record("2025-06-18", &[]));
    api.punch_error = Some(|| AppError::Unauthorized);

    let gate = AttendanceGate::new(&api, &session, desktop());
    assert!(matches!(gate.perform(now()), Err(AppError::Unauthorized)));
}

#[test]
fn test_empty_server_message_gets_default() {
    let session = signed_in_session(Some(1));
    let mut api = FakeAttendance::with_record(record("2025-06-18", &[("09:00:00", None)]));
    api.message = String::new();

    let gate = AttendanceGate::new(&api, &session, desktop());
    let outcome = gate.perform(now()).unwrap();
    assert_eq!(outcome.message, "Successfully checked out");
}

#[test]
fn test_signed_out_user_cannot_punch() {
    let session = SessionContext::new(Arc::new(MemoryStore::new()));
    let api = FakeAttendance::with_record(record("2025-06-18", &[]));

    let gate = AttendanceGate::new(&api, &session, desktop());
    assert!(matches!(gate.perform(now()), Err(AppError::NotLoggedIn)));
    assert!(api.calls().is_empty());
}
