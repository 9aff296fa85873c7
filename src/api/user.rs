use super::ApiClient;
use crate::errors::AppResult;
use crate::models::api::ApiResponse;
use crate::models::user::UserProfile;

impl ApiClient {
    pub fn user_profile(&self, user_id: i64) -> AppResult<UserProfile> {
        let resp: ApiResponse<UserProfile> = self.get(&format!("/Users/{user_id}"), &[])?;
        Ok(resp.data)
    }
}
