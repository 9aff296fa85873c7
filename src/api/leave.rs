use super::ApiClient;
use crate::errors::AppResult;
use crate::models::api::PagedResponse;
use crate::models::leave::{LeaveBalanceReport, LeaveRequest, LeaveType};

const LIST_PAGE_SIZE: &str = "6";

impl ApiClient {
    pub fn leave_balances(&self, employee_id: i64) -> AppResult<Vec<LeaveBalanceReport>> {
        let resp: PagedResponse<LeaveBalanceReport> = self.get(
            "/Leaves/types/employeeAssociations/balanceReports",
            &[
                ("employeeId", employee_id.to_string()),
                ("pageNumber", "1".into()),
                ("pageSize", "10".into()),
            ],
        )?;
        Ok(resp.data)
    }

    pub fn leave_types(&self) -> AppResult<Vec<LeaveType>> {
        let resp: PagedResponse<LeaveType> = self.get(
            "/Leaves/types",
            &[("pageNumber", "1".into()), ("pageSize", "100".into())],
        )?;
        Ok(resp.data)
    }

    /// Leaves from `now` on (`fromDate`).
    pub fn upcoming_leaves(&self, user_id: i64, now: &str) -> AppResult<Vec<LeaveRequest>> {
        self.leaves_page(user_id, "fromDate", now)
    }

    /// Leaves up to `now` (`endDate`).
    pub fn past_leaves(&self, user_id: i64, now: &str) -> AppResult<Vec<LeaveRequest>> {
        self.leaves_page(user_id, "endDate", now)
    }

    fn leaves_page(&self, user_id: i64, bound: &str, now: &str) -> AppResult<Vec<LeaveRequest>> {
        let resp: PagedResponse<LeaveRequest> = self.get(
            "/Leaves",
            &[
                ("pageNumber", "1".into()),
                ("pageSize", LIST_PAGE_SIZE.into()),
                (bound, now.to_string()),
                ("userId", user_id.to_string()),
            ],
        )?;
        Ok(resp.data)
    }

    pub fn create_leave(&self, req: &LeaveRequest) -> AppResult<LeaveRequest> {
        self.post("/Leaves", req)
    }

    pub fn cancel_leave(&self, id: i64) -> AppResult<()> {
        self.delete_unit(&format!("/Leaves/{id}"))
    }
}
