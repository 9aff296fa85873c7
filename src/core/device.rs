//! Push-notification device registration.

use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::models::user::DeviceRegistration;
use crate::session::SessionContext;

pub struct DeviceLogic;

impl DeviceLogic {
    /// The token is stored only once the backend confirmed the registration.
    pub fn register(
        api: &ApiClient,
        session: &SessionContext,
        reg: &DeviceRegistration,
    ) -> AppResult<()> {
        session.require_user()?;
        api.register_device(reg)?;
        session.set_device_token(&reg.device_token)?;
        session.audit("device_register", &reg.platform, "Push token registered");
        Ok(())
    }

    /// Returns false when no token was stored.
    pub fn unregister(api: &ApiClient, session: &SessionContext) -> AppResult<bool> {
        session.require_user()?;
        let Some(token) = session.device_token()? else {
            return Ok(false);
        };
        api.unregister_device(&token)?;
        session.remove_device_token()?;
        session.audit("device_unregister", "", "Push token removed");
        Ok(true)
    }
}
