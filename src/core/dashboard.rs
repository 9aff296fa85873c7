//! Dashboard feed: announcements, holidays, birthdays, work anniversaries.

use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::models::dashboard::DashboardFeed;
use crate::session::SessionContext;
use chrono::NaiveDate;

pub struct DashboardLogic;

impl DashboardLogic {
    /// Feed for the month of `today`, dropped if the session changed meanwhile.
    pub fn load(
        api: &ApiClient,
        session: &SessionContext,
        today: NaiveDate,
    ) -> AppResult<DashboardFeed> {
        session.require_user()?;
        let tag = session.tag();
        let feed = api.dashboard(today)?;
        session.ensure_current(tag)?;
        tracing::debug!(
            announcements = feed.announcements.len(),
            holidays = feed.upcoming_holidays.len(),
            "dashboard refreshed"
        );
        Ok(feed)
    }
}
