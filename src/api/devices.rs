use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::user::{DeviceRegistration, DeviceResponse};

impl ApiClient {
    pub fn register_device(&self, reg: &DeviceRegistration) -> AppResult<()> {
        let resp: DeviceResponse = self.post("/devices/register", reg)?;
        if resp.status == "Success" {
            Ok(())
        } else {
            Err(AppError::Api {
                status: 200,
                message: resp
                    .message
                    .unwrap_or_else(|| "Failed to register device".to_string()),
            })
        }
    }

    pub fn unregister_device(&self, device_token: &str) -> AppResult<()> {
        self.post_unit(
            "/devices/unregister",
            &serde_json::json!({ "deviceToken": device_token }),
        )
    }
}
