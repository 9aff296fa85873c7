//! Check-in / check-out gate.

use crate::api::AttendanceApi;
use crate::core::session_clock::session_elapsed;
use crate::device::location::{LocationProvider, Permission, position_within};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, PunchRequest};
use crate::session::SessionContext;
use chrono::{Duration, NaiveDateTime};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchIntent {
    CheckIn,
    CheckOut,
}

impl PunchIntent {
    /// Check-out while the session clock is running, check-in otherwise.
    pub fn for_record(record: &AttendanceRecord, now: NaiveDateTime) -> Self {
        if session_elapsed(record, now) > Duration::zero() {
            PunchIntent::CheckOut
        } else {
            PunchIntent::CheckIn
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchIntent::CheckIn => "check-in",
            PunchIntent::CheckOut => "check-out",
        }
    }

    fn default_message(&self) -> &'static str {
        match self {
            PunchIntent::CheckIn => "Successfully checked in",
            PunchIntent::CheckOut => "Successfully checked out",
        }
    }
}

impl fmt::Display for PunchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct PunchOutcome {
    pub intent: PunchIntent,
    pub message: String,
    /// Refreshed record; `None` when the follow-up fetch failed.
    pub record: Option<AttendanceRecord>,
}

pub struct AttendanceGate<'a, A: AttendanceApi + ?Sized> {
    api: &'a A,
    session: &'a SessionContext,
    location: Arc<dyn LocationProvider>,
}

impl<'a, A: AttendanceApi + ?Sized> AttendanceGate<'a, A> {
    pub fn new(api: &'a A, session: &'a SessionContext, location: Arc<dyn LocationProvider>) -> Self {
        Self {
            api,
            session,
            location,
        }
    }

    /// Today's record for the signed-in user, dropped if the session changed
    /// while the request was in flight.
    pub fn today(&self, now: NaiveDateTime) -> AppResult<AttendanceRecord> {
        let user = self.session.require_user()?;
        let tag = self.session.tag();
        let record = self.api.day_attendance(user.id, now.date())?;
        self.session.ensure_current(tag)?;
        Ok(record)
    }

    /// Intent without side effects, for display.
    pub fn intent(&self, now: NaiveDateTime) -> AppResult<PunchIntent> {
        Ok(PunchIntent::for_record(&self.today(now)?, now))
    }

    /// Coordinates are only attached in a location-capable context.
    fn punch_request(&self) -> AppResult<PunchRequest> {
        if !self.location.is_available() {
            return Ok(PunchRequest::default());
        }

        if self.location.request_permission()? == Permission::Denied {
            tracing::warn!("location permission denied, punch aborted");
            return Err(AppError::PermissionDenied);
        }

        let coords = position_within(self.location.clone(), self.location.timeout())?;
        Ok(PunchRequest {
            latitude: Some(coords.latitude),
            longitude: Some(coords.longitude),
            is_mobile_check_in: true,
        })
    }

    /// Decide check-in vs check-out and execute it once. No retries.
    pub fn perform(&self, now: NaiveDateTime) -> AppResult<PunchOutcome> {
        let record = self.today(now)?;
        let intent = PunchIntent::for_record(&record, now);
        tracing::info!(%intent, date = %record.date, "punch requested");

        let request = self.punch_request()?;

        let sent = match intent {
            PunchIntent::CheckIn => self.api.check_in(&request),
            PunchIntent::CheckOut => self.api.check_out(&request),
        };
        let message = match sent {
            Ok(m) if m.trim().is_empty() => intent.default_message().to_string(),
            Ok(m) => m,
            Err(AppError::Unauthorized) => return Err(AppError::Unauthorized),
            Err(e) => {
                tracing::error!(%intent, error = %e, "punch failed");
                return Err(AppError::PunchFailed(e.to_string()));
            }
        };

        self.session.audit("punch", intent.label(), &message);

        let refreshed = match self.today(now) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::warn!(error = %e, "attendance refresh after punch failed");
                None
            }
        };

        Ok(PunchOutcome {
            intent,
            message,
            record: refreshed,
        })
    }
}
