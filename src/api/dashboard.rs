use super::ApiClient;
use crate::errors::AppResult;
use crate::models::api::ApiResponse;
use crate::models::dashboard::{AnalyticsRange, AnalyticsRequest, DashboardFeed};
use crate::utils::date::{month_bounds, to_iso};
use chrono::NaiveDate;

/// Widgets requested from the analytics endpoint.
const WIDGETS: [u8; 7] = [1, 2, 3, 4, 5, 7, 8];
/// Widgets that take no date window.
const UNBOUNDED_WIDGETS: [u8; 3] = [4, 7, 8];

/// Analytics body for the month containing `today`.
pub fn analytics_request(today: NaiveDate) -> AnalyticsRequest {
    let (first, last) = month_bounds(today);
    WIDGETS
        .iter()
        .map(|id| {
            let range = if UNBOUNDED_WIDGETS.contains(id) {
                AnalyticsRange::default()
            } else {
                AnalyticsRange {
                    start_date: Some(to_iso(first)),
                    end_date: Some(to_iso(last)),
                }
            };
            (*id, range)
        })
        .collect()
}

impl ApiClient {
    /// Announcements, holidays, birthdays and anniversaries; a missing
    /// `data` block is an empty feed.
    pub fn dashboard(&self, today: NaiveDate) -> AppResult<DashboardFeed> {
        let resp: ApiResponse<Option<DashboardFeed>> =
            self.post("/Common/analytics", &analytics_request(today))?;
        Ok(resp.data.unwrap_or_default())
    }
}
