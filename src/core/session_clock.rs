//! Elapsed time of the currently open work session.

use crate::models::attendance::AttendanceRecord;
use crate::utils::date::parse_date;
use crate::utils::time::{format_hms, parse_time_of_day};
use chrono::{Duration, Local, NaiveDateTime};

/// Elapsed time since the start of the open log, whole seconds.
///
/// Zero when there are no logs, the last log is closed, the date or time
/// cannot be parsed, or `now` is before the start.
pub fn session_elapsed(record: &AttendanceRecord, now: NaiveDateTime) -> Duration {
    let Some(last) = record.last_log() else {
        return Duration::zero();
    };
    if !last.is_open() {
        return Duration::zero();
    }

    let (Some(day), Some(start)) = (
        parse_date(&record.date),
        parse_time_of_day(&last.start_time),
    ) else {
        tracing::debug!(date = %record.date, start = %last.start_time, "unparseable session start");
        return Duration::zero();
    };

    let delta = now - day.and_time(start);
    if delta < Duration::zero() {
        return Duration::zero();
    }
    Duration::seconds(delta.num_seconds())
}

/// `HH:MM:SS` rendering of `session_elapsed`.
pub fn session_time(record: &AttendanceRecord, now: NaiveDateTime) -> String {
    format_hms(session_elapsed(record, now))
}

pub fn session_time_now(record: &AttendanceRecord) -> String {
    session_time(record, Local::now().naive_local())
}
