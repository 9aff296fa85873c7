use crate::models::api::FlexibleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date window for one analytics widget; empty for widgets that take none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Body of `/Common/analytics`, keyed by widget id.
pub type AnalyticsRequest = BTreeMap<u8, AnalyticsRange>;

/// Announcement or holiday entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardItem {
    #[serde(default)]
    pub id: Option<FlexibleId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color_code: Option<String>,
}

/// Birthday or work anniversary of a colleague.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonEvent {
    #[serde(default)]
    pub id: Option<FlexibleId>,
    #[serde(default)]
    pub user_id: Option<FlexibleId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub date_of_joining: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Completed years, anniversaries only.
    #[serde(default)]
    pub tenure: Option<u32>,
}

impl PersonEvent {
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        match name.trim() {
            "" => "Unknown".to_string(),
            n => n.to_string(),
        }
    }

    pub fn department_or_unknown(&self) -> &str {
        self.department
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("Unknown")
    }

    /// Anniversaries are dated by the joining date.
    pub fn anniversary_date(&self) -> &str {
        self.date_of_joining
            .as_deref()
            .or(self.date.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFeed {
    #[serde(default)]
    pub announcements: Vec<DashboardItem>,
    #[serde(default)]
    pub upcoming_holidays: Vec<DashboardItem>,
    #[serde(default)]
    pub upcoming_birthdays: Vec<PersonEvent>,
    #[serde(default)]
    pub work_anniversaries: Vec<PersonEvent>,
}

impl DashboardFeed {
    pub fn is_empty(&self) -> bool {
        self.announcements.is_empty()
            && self.upcoming_holidays.is_empty()
            && self.upcoming_birthdays.is_empty()
            && self.work_anniversaries.is_empty()
    }
}
