//! Time-off listing, application and cancellation.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::leave::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
use crate::session::SessionContext;
use crate::utils::date::{parse_date, to_iso};
use chrono::Utc;
use std::collections::BTreeMap;

/// Form input for a new leave request, before validation.
#[derive(Debug, Clone, Default)]
pub struct LeaveApplication {
    pub leave_type_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub reason: Option<String>,
    pub start_first_half: bool,
    pub start_second_half: bool,
    pub end_first_half: bool,
    pub end_second_half: bool,
    /// Users to notify once approved.
    pub notify: Vec<String>,
}

/// Name of leave type `type_id`; `None` without a catalogue to check against.
pub fn resolve_type_name(types: &[LeaveType], type_id: i64) -> AppResult<Option<String>> {
    if types.is_empty() {
        return Ok(None);
    }
    types
        .iter()
        .find(|t| t.id == type_id)
        .map(|t| Some(t.name.clone()))
        .ok_or_else(|| AppError::Validation(format!("unknown leave type {type_id}")))
}

impl LeaveApplication {
    /// Check the form and build the request body. The leave type name is
    /// resolved from `types` when the list is available.
    pub fn validate(&self, types: &[LeaveType]) -> AppResult<LeaveRequest> {
        let type_id = self
            .leave_type_id
            .ok_or_else(|| AppError::Validation("leave type is required".into()))?;

        let type_name = resolve_type_name(types, type_id)?;

        let start_raw = self
            .start_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("start date is required".into()))?;
        let start = parse_date(start_raw)
            .ok_or_else(|| AppError::Validation(format!("invalid start date '{start_raw}'")))?;

        let end = match self.end_date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_date(raw)
                .ok_or_else(|| AppError::Validation(format!("invalid end date '{raw}'")))?,
            None => start,
        };

        if end < start {
            return Err(AppError::Validation(
                "end date must not be before start date".into(),
            ));
        }
        if self.start_first_half && self.start_second_half {
            return Err(AppError::Validation(
                "start date cannot be both first half and second half".into(),
            ));
        }
        if self.end_first_half && self.end_second_half {
            return Err(AppError::Validation(
                "end date cannot be both first half and second half".into(),
            ));
        }

        let notify: Vec<&str> = self
            .notify
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(LeaveRequest {
            leave_type_id: Some(type_id),
            leave_type_name: type_name,
            start_date: Some(to_iso(start)),
            end_date: Some(to_iso(end)),
            reason: self.reason.clone().filter(|r| !r.trim().is_empty()),
            start_first_half: self.start_first_half,
            start_second_half: self.start_second_half,
            end_first_half: self.end_first_half,
            end_second_half: self.end_second_half,
            users_to_notify_on_approval: if notify.is_empty() {
                None
            } else {
                Some(notify.join(", "))
            },
            ..LeaveRequest::default()
        })
    }
}

/// Upcoming and past leaves with their classified status.
#[derive(Debug, Clone, Default)]
pub struct LeaveOverview {
    pub upcoming: Vec<(LeaveRequest, LeaveStatus)>,
    pub past: Vec<(LeaveRequest, LeaveStatus)>,
}

impl LeaveOverview {
    pub fn from_lists(upcoming: Vec<LeaveRequest>, past: Vec<LeaveRequest>) -> Self {
        let classify = |v: Vec<LeaveRequest>| {
            v.into_iter()
                .map(|l| {
                    let s = l.status();
                    (l, s)
                })
                .collect()
        };
        Self {
            upcoming: classify(upcoming),
            past: classify(past),
        }
    }

    /// Count per status across both lists.
    pub fn tally(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        for (_, s) in self.upcoming.iter().chain(self.past.iter()) {
            *out.entry(s.label()).or_insert(0) += 1;
        }
        out
    }
}

pub struct LeaveLogic;

impl LeaveLogic {
    pub fn overview(api: &ApiClient, session: &SessionContext) -> AppResult<LeaveOverview> {
        let user = session.require_user()?;
        let now = Utc::now().to_rfc3339();
        let upcoming = api.upcoming_leaves(user.id, &now)?;
        let past = api.past_leaves(user.id, &now)?;
        Ok(LeaveOverview::from_lists(upcoming, past))
    }

    /// Buckets of the first (own) report entry.
    pub fn balances(api: &ApiClient, session: &SessionContext) -> AppResult<Vec<LeaveBalance>> {
        let user = session.require_user()?;
        let reports = api.leave_balances(user.id)?;
        Ok(reports
            .into_iter()
            .next()
            .map(|r| r.leave_buckets)
            .unwrap_or_default())
    }

    /// Validate locally, then submit. Nothing is sent when validation fails.
    pub fn apply(
        api: &ApiClient,
        session: &SessionContext,
        form: &LeaveApplication,
    ) -> AppResult<LeaveRequest> {
        session.require_user()?;
        let mut request = form.validate(&[])?;
        let types = api.leave_types()?;
        if let Some(type_id) = request.leave_type_id {
            request.leave_type_name = resolve_type_name(&types, type_id)?;
        }
        let created = api.create_leave(&request)?;
        session.audit(
            "leave_apply",
            request.start_date.as_deref().unwrap_or(""),
            &format!(
                "{} → {} ({})",
                request.start_date.as_deref().unwrap_or(""),
                request.end_date.as_deref().unwrap_or(""),
                request.leave_type_name.as_deref().unwrap_or("leave")
            ),
        );
        Ok(created)
    }

    pub fn cancel(api: &ApiClient, session: &SessionContext, id: i64) -> AppResult<()> {
        session.require_user()?;
        api.cancel_leave(id)?;
        session.audit("leave_cancel", &id.to_string(), "Leave request cancelled");
        Ok(())
    }
}
