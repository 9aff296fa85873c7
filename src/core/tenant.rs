//! Switching the active organization.

use crate::api::TenantApi;
use crate::device::shell::ShellReloader;
use crate::errors::{AppError, AppResult};
use crate::models::tenant::{Tenant, TenantBranding};
use crate::models::user::User;
use crate::session::SessionContext;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    Switched {
        tenant_id: i64,
        branding: Option<TenantBranding>,
    },
    /// Target already active; nothing was sent.
    AlreadyActive,
    /// Another switch holds the guard; nothing was sent.
    InFlight,
}

/// Releases the single-flight flag however the switch ends.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct TenantSwitcher<'a, T: TenantApi + ?Sized, R: ShellReloader + ?Sized> {
    api: &'a T,
    session: &'a SessionContext,
    shell: &'a R,
    in_flight: AtomicBool,
}

impl<'a, T: TenantApi + ?Sized, R: ShellReloader + ?Sized> TenantSwitcher<'a, T, R> {
    pub fn new(api: &'a T, session: &'a SessionContext, shell: &'a R) -> Self {
        Self {
            api,
            session,
            shell,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_switching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Tenants sorted active first, keeping server order otherwise.
    pub fn tenants(&self) -> AppResult<Vec<Tenant>> {
        let mut tenants = self.api.list_tenants()?;
        tenants.sort_by_key(|t| !t.is_active);
        Ok(tenants)
    }

    pub fn switch(&self, tenant: &Tenant) -> AppResult<SwitchOutcome> {
        let current = self.session.require_user()?.current_tenant_id;
        if current == Some(tenant.id) {
            return Ok(SwitchOutcome::AlreadyActive);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(tenant_id = tenant.id, "switch already in flight");
            return Ok(SwitchOutcome::InFlight);
        }
        let _guard = FlightGuard(&self.in_flight);

        if !tenant.is_active {
            return Err(AppError::InactiveTenant(tenant.id));
        }

        tracing::info!(tenant_id = tenant.id, "switching organization");
        let resp = self.api.select_tenant(tenant.id)?;
        let data = match resp.data {
            Some(d) if resp.success => d,
            _ => {
                return Err(AppError::Api {
                    status: 200,
                    message: resp
                        .message
                        .unwrap_or_else(|| "Failed to switch organization".into()),
                });
            }
        };

        let token = if data.token.trim().is_empty() {
            self.session.auth_token()?.ok_or(AppError::NotLoggedIn)?
        } else {
            data.token.clone()
        };
        let mut user = User::from(&data);
        if user.current_tenant_id.is_none() {
            user.current_tenant_id = Some(tenant.id);
        }

        self.session.store_login(&token, &user)?;
        self.session.clear_branding()?;

        let branding = match self.api.tenant_details() {
            Ok(b) => {
                self.session.set_branding(&b)?;
                Some(b)
            }
            Err(e) => {
                tracing::warn!(error = %e, "tenant branding fetch failed after switch");
                None
            }
        };

        self.session.audit(
            "tenant_switch",
            &tenant.id.to_string(),
            &format!("Switched to {}", tenant.name),
        );
        self.shell.reload(self.session)?;

        Ok(SwitchOutcome::Switched {
            tenant_id: tenant.id,
            branding,
        })
    }

    /// Look up `tenant_id` in the user's tenants, then switch.
    /// The active tenant short-circuits before the list is fetched.
    pub fn switch_by_id(&self, tenant_id: i64) -> AppResult<SwitchOutcome> {
        if self.session.require_user()?.current_tenant_id == Some(tenant_id) {
            return Ok(SwitchOutcome::AlreadyActive);
        }
        let tenants = self.tenants()?;
        let tenant = tenants
            .iter()
            .find(|t| t.id == tenant_id)
            .ok_or(AppError::UnknownTenant(tenant_id))?;
        self.switch(tenant)
    }
}

/// Branding for the active tenant: cached copy, else fetched and cached.
pub fn branding<T: TenantApi + ?Sized>(
    api: &T,
    session: &SessionContext,
) -> AppResult<TenantBranding> {
    if let Some(b) = session.branding()? {
        return Ok(b);
    }
    let tag = session.tag();
    let fetched = api.tenant_details()?;
    session.ensure_current(tag)?;
    session.set_branding(&fetched)?;
    Ok(fetched)
}
