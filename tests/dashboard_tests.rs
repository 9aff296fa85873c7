use chrono::NaiveDate;
use hrdesk::api::dashboard::analytics_request;
use hrdesk::models::dashboard::{DashboardFeed, PersonEvent};
use hrdesk::utils::date::month_bounds;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_month_bounds() {
    assert_eq!(month_bounds(ymd(2024, 2, 17)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
    assert_eq!(month_bounds(ymd(2025, 12, 31)), (ymd(2025, 12, 1), ymd(2025, 12, 31)));
}

#[test]
fn test_analytics_request_bounds_dated_widgets() {
    let body = serde_json::to_value(analytics_request(ymd(2025, 12, 5))).unwrap();

    for key in ["1", "2", "3", "5"] {
        assert_eq!(body[key]["startDate"], "2025-12-01");
        assert_eq!(body[key]["endDate"], "2025-12-31");
    }
    for key in ["4", "7", "8"] {
        assert_eq!(body[key], serde_json::json!({}));
    }
    assert!(body.get("6").is_none());
}

#[test]
fn test_person_event_names() {
    let named: PersonEvent =
        serde_json::from_str(r#"{"firstName":"Grace","lastName":"Hopper "}"#).unwrap();
    let blank: PersonEvent = serde_json::from_str(r#"{"firstName":"  "}"#).unwrap();

    assert_eq!(named.display_name(), "Grace Hopper");
    assert_eq!(blank.display_name(), "Unknown");
    assert_eq!(blank.department_or_unknown(), "Unknown");
}

#[test]
fn test_anniversary_prefers_joining_date() {
    let ev: PersonEvent =
        serde_json::from_str(r#"{"date":"2025-03-01","dateOfJoining":"2020-03-01"}"#).unwrap();
    let only_date: PersonEvent = serde_json::from_str(r#"{"date":"2025-03-01"}"#).unwrap();

    assert_eq!(ev.anniversary_date(), "2020-03-01");
    assert_eq!(only_date.anniversary_date(), "2025-03-01");
}

#[test]
fn test_partial_feed_fills_missing_sections() {
    let feed: DashboardFeed =
        serde_json::from_str(r#"{"upcomingHolidays":[{"name":"New Year","date":"2026-01-01"}]}"#)
            .unwrap();

    assert!(!feed.is_empty());
    assert!(feed.announcements.is_empty());
    assert_eq!(feed.upcoming_holidays[0].name, "New Year");
}
