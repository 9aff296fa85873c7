//! Session context: the persisted authentication, user and tenant state.
//!
//! Every component receives a `SessionContext` explicitly. Mutations bump a
//! generation counter; work started under an older generation can detect
//! that the context moved on and drop its result.

pub mod store;

use crate::errors::{AppError, AppResult};
use crate::models::tenant::{TenantBranding, TenantContext};
use crate::models::user::User;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use store::KeyValueStore;

pub const KEY_AUTH_TOKEN: &str = "auth_token";
pub const KEY_USER: &str = "user";
pub const KEY_TENANT_LOGO: &str = "tenantLogo";
pub const KEY_TENANT_NAME: &str = "tenantName";
pub const KEY_DEVICE_TOKEN: &str = "device_token";
pub const KEY_APP_LAUNCHED_BEFORE: &str = "appLaunchedBefore";

/// Snapshot of the context generation at the time a request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextTag(u64);

pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    generation: AtomicU64,
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            generation: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    // ---------------------------
    // Generation tagging
    // ---------------------------

    pub fn tag(&self) -> ContextTag {
        ContextTag(self.generation.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, tag: ContextTag) -> bool {
        self.tag() == tag
    }

    /// Err(StaleContext) when the context changed since `tag` was taken.
    pub fn ensure_current(&self, tag: ContextTag) -> AppResult<()> {
        if self.is_current(tag) {
            Ok(())
        } else {
            tracing::debug!(?tag, current = ?self.tag(), "discarding stale response");
            Err(AppError::StaleContext)
        }
    }

    /// Invalidate every outstanding tag.
    pub fn bump_generation(&self) -> ContextTag {
        ContextTag(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    // ---------------------------
    // Authentication
    // ---------------------------

    pub fn auth_token(&self) -> AppResult<Option<String>> {
        Ok(self
            .store
            .get(KEY_AUTH_TOKEN)?
            .filter(|t| !t.trim().is_empty()))
    }

    pub fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.auth_token()?.is_some())
    }

    pub fn user(&self) -> AppResult<Option<User>> {
        let Some(raw) = self.store.get(KEY_USER)? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(mut user) => {
                if user.name.trim().is_empty() {
                    user.name = user.display_name();
                }
                Ok(Some(user))
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored user is not valid JSON, ignoring it");
                Ok(None)
            }
        }
    }

    pub fn require_user(&self) -> AppResult<User> {
        if !self.is_authenticated()? {
            return Err(AppError::NotLoggedIn);
        }
        self.user()?.ok_or(AppError::NotLoggedIn)
    }

    /// Persist a fresh token and user (login or tenant switch).
    pub fn store_login(&self, token: &str, user: &User) -> AppResult<()> {
        self.store.set(KEY_AUTH_TOKEN, token)?;
        self.store.set(KEY_USER, &serde_json::to_string(user)?)?;
        self.bump_generation();
        Ok(())
    }

    /// Drop token and user, as done on a 401.
    pub fn clear_auth(&self) -> AppResult<()> {
        self.store.remove(KEY_AUTH_TOKEN)?;
        self.store.remove(KEY_USER)?;
        self.bump_generation();
        Ok(())
    }

    /// Wipe everything except the first-launch marker.
    pub fn clear_all(&self) -> AppResult<()> {
        let launched = self.store.get(KEY_APP_LAUNCHED_BEFORE)?;
        self.store.clear()?;
        if let Some(v) = launched {
            self.store.set(KEY_APP_LAUNCHED_BEFORE, &v)?;
        }
        self.bump_generation();
        Ok(())
    }

    // ---------------------------
    // Tenant
    // ---------------------------

    pub fn active_tenant_id(&self) -> AppResult<Option<i64>> {
        Ok(self.user()?.and_then(|u| u.current_tenant_id))
    }

    pub fn branding(&self) -> AppResult<Option<TenantBranding>> {
        let name = self.store.get(KEY_TENANT_NAME)?;
        let logo = self.store.get(KEY_TENANT_LOGO)?;
        Ok(name.map(|tenant_name| TenantBranding {
            logo_url: logo.filter(|l| !l.is_empty()),
            tenant_name,
        }))
    }

    pub fn set_branding(&self, branding: &TenantBranding) -> AppResult<()> {
        self.store.set(
            KEY_TENANT_LOGO,
            branding.logo_url.as_deref().unwrap_or_default(),
        )?;
        let name = if branding.tenant_name.trim().is_empty() {
            "Unknown Tenant"
        } else {
            branding.tenant_name.as_str()
        };
        self.store.set(KEY_TENANT_NAME, name)
    }

    pub fn clear_branding(&self) -> AppResult<()> {
        self.store.remove(KEY_TENANT_LOGO)?;
        self.store.remove(KEY_TENANT_NAME)
    }

    pub fn tenant_context(&self) -> AppResult<TenantContext> {
        Ok(TenantContext {
            active_tenant_id: self.active_tenant_id()?,
            auth_token: self.auth_token()?,
            branding: self.branding()?,
        })
    }

    // ---------------------------
    // Device / launch markers
    // ---------------------------

    pub fn device_token(&self) -> AppResult<Option<String>> {
        self.store.get(KEY_DEVICE_TOKEN)
    }

    pub fn set_device_token(&self, token: &str) -> AppResult<()> {
        self.store.set(KEY_DEVICE_TOKEN, token)
    }

    pub fn remove_device_token(&self) -> AppResult<()> {
        self.store.remove(KEY_DEVICE_TOKEN)
    }

    /// True exactly once per store: marks the app as launched.
    pub fn take_first_launch(&self) -> AppResult<bool> {
        if self.store.get(KEY_APP_LAUNCHED_BEFORE)?.is_some() {
            return Ok(false);
        }
        self.store.set(KEY_APP_LAUNCHED_BEFORE, "true")?;
        Ok(true)
    }

    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        self.store.audit(operation, target, message);
    }
}
