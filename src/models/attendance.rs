use serde::{Deserialize, Serialize};

/// One open/close interval of work within a day.
///
/// Times are kept as the server sends them (`HH:MM:SS[.ffffff]`); parsing
/// happens in the session clock so a malformed value degrades to zero
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_id: Option<i64>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

impl TimeLog {
    pub fn is_open(&self) -> bool {
        !self.start_time.trim().is_empty()
            && self
                .end_time
                .as_deref()
                .map(|t| t.trim().is_empty())
                .unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    /// Calendar date, `YYYY-MM-DD` (a trailing `T...` part is tolerated).
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_status_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_status: Option<String>,
    #[serde(default)]
    pub time_logs: Vec<TimeLog>,
}

impl AttendanceRecord {
    /// Placeholder for a day the server has no record for.
    pub fn empty(date: &str) -> Self {
        Self {
            date: date.to_string(),
            ..Self::default()
        }
    }

    pub fn last_log(&self) -> Option<&TimeLog> {
        self.time_logs.last()
    }

    /// Checked in when the last log has a start and no end.
    pub fn is_checked_in(&self) -> bool {
        self.last_log().map(TimeLog::is_open).unwrap_or(false)
    }
}

/// Body of `startTimer` / `stopTimer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub is_mobile_check_in: bool,
}
