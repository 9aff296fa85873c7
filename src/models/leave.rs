use crate::utils::colors::{GREEN, RED, YELLOW};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    Approved,
    Pending,
    Rejected,
}

impl LeaveStatus {
    /// Strict mapping of the server code; `None` for anything outside {1,2,3}.
    pub fn try_from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(LeaveStatus::Approved),
            2 => Some(LeaveStatus::Pending),
            3 => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }

    /// Lenient mapping used for display: unknown or missing codes are Pending.
    pub fn from_code(code: Option<i64>) -> Self {
        code.and_then(Self::try_from_code)
            .unwrap_or(LeaveStatus::Pending)
    }

    pub fn code(&self) -> i64 {
        match self {
            LeaveStatus::Approved => 1,
            LeaveStatus::Pending => 2,
            LeaveStatus::Rejected => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LeaveStatus::Approved => "✔",
            LeaveStatus::Pending => "⏳",
            LeaveStatus::Rejected => "✖",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            LeaveStatus::Approved => GREEN,
            LeaveStatus::Pending => YELLOW,
            LeaveStatus::Rejected => RED,
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_approved: Option<bool>,
    #[serde(default)]
    pub start_first_half: bool,
    #[serde(default)]
    pub start_second_half: bool,
    #[serde(default)]
    pub end_first_half: bool,
    #[serde(default)]
    pub end_second_half: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_to_notify_on_approval: Option<String>,
}

impl LeaveRequest {
    pub fn status(&self) -> LeaveStatus {
        LeaveStatus::from_code(self.status)
    }

    /// Date shown in listings: the single leave date, else the range start.
    pub fn display_date(&self) -> &str {
        self.leave_date
            .as_deref()
            .or(self.start_date.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub color_code: Option<String>,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub is_paid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    #[serde(default)]
    pub employee_id: i64,
    pub leave_type_id: i64,
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    #[serde(default)]
    pub till_date: Option<String>,
    #[serde(default)]
    pub available_leaves: f64,
    #[serde(default)]
    pub planned_leaves: f64,
    #[serde(default)]
    pub used_leaves: f64,
    #[serde(default)]
    pub leave_policy_description: Option<String>,
}

/// One employee entry of the balance report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalanceReport {
    #[serde(default)]
    pub employee_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub leave_buckets: Vec<LeaveBalance>,
    #[serde(default)]
    pub upcoming_leaves: Vec<LeaveRequest>,
    #[serde(default)]
    pub past_leaves: Vec<LeaveRequest>,
}
