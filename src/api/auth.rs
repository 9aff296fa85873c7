use super::ApiClient;
use crate::errors::AppResult;
use crate::models::api::ApiResponse;
use crate::models::user::{LoginRequest, LoginResponse};

impl ApiClient {
    pub fn login(&self, credentials: &LoginRequest) -> AppResult<LoginResponse> {
        let resp: ApiResponse<LoginResponse> = self.post("/Account/login", credentials)?;
        Ok(resp.data)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.post_unit("/Account/logout", &serde_json::json!({}))
    }
}
