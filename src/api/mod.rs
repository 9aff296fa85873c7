//! REST endpoint bindings.
//!
//! The attendance and tenant endpoints sit behind traits because the core
//! flows (check-in/out gate, tenant switch) are driven through them; the
//! rest are plain methods on `ApiClient`.

pub mod attendance;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod devices;
pub mod leave;
pub mod notifications;
pub mod payslip;
pub mod tenant;
pub mod user;

use crate::errors::AppResult;
use crate::models::attendance::{AttendanceRecord, PunchRequest};
use crate::models::tenant::{Tenant, TenantBranding};
use crate::models::user::SelectTenantResponse;
use chrono::NaiveDate;

pub use client::ApiClient;

pub trait AttendanceApi {
    /// Record for `date`, or an empty record when the server has none.
    fn day_attendance(&self, employee_id: i64, date: NaiveDate) -> AppResult<AttendanceRecord>;
    /// Returns the server's confirmation message.
    fn check_in(&self, req: &PunchRequest) -> AppResult<String>;
    fn check_out(&self, req: &PunchRequest) -> AppResult<String>;
}

pub trait TenantApi {
    fn list_tenants(&self) -> AppResult<Vec<Tenant>>;
    fn select_tenant(&self, tenant_id: i64) -> AppResult<SelectTenantResponse>;
    /// Branding of the tenant the current token belongs to.
    fn tenant_details(&self) -> AppResult<TenantBranding>;
}
