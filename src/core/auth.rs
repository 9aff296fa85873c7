//! Login / logout and the first-launch marker.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::user::{LoginRequest, User};
use crate::session::SessionContext;

pub struct AuthLogic;

impl AuthLogic {
    pub fn login(
        api: &ApiClient,
        session: &SessionContext,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "email and password are required".into(),
            ));
        }

        let resp = api.login(&LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        })?;
        if resp.token.trim().is_empty() {
            return Err(AppError::Api {
                status: 200,
                message: "login response carried no token".into(),
            });
        }

        let user = User::from(&resp);
        session.store_login(&resp.token, &user)?;
        session.audit("login", &user.email, &format!("Signed in as {}", user.name));
        tracing::info!(user_id = user.id, "signed in");
        Ok(user)
    }

    /// Local state is cleared even when the server calls fail.
    pub fn logout(api: &ApiClient, session: &SessionContext) -> AppResult<()> {
        if session.auth_token()?.is_some() {
            if let Some(device) = session.device_token()?
                && let Err(e) = api.unregister_device(&device)
            {
                tracing::warn!(error = %e, "device unregistration failed during logout");
            }
            if let Err(e) = api.logout() {
                tracing::warn!(error = %e, "remote logout failed, clearing local session anyway");
            }
        }

        session.clear_all()?;
        session.audit("logout", "", "Signed out");
        Ok(())
    }
}
