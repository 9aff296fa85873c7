use super::ApiClient;
use crate::errors::AppResult;
use crate::models::api::FlexibleId;
use crate::models::notification::{Notification, UnreadCount};

impl ApiClient {
    pub fn notifications(&self) -> AppResult<Vec<Notification>> {
        self.get("/notifications", &[])
    }

    pub fn unread_count(&self) -> AppResult<u32> {
        let resp: UnreadCount = self.get("/notifications", &[("pageNo", "1".into())])?;
        Ok(resp.count)
    }

    pub fn mark_read(&self, id: &FlexibleId) -> AppResult<()> {
        self.put_unit(&format!("/notifications/{id}/read"))
    }

    pub fn mark_all_read(&self) -> AppResult<()> {
        self.put_unit("/notifications/read-all")
    }
}
