use super::{ApiClient, AttendanceApi};
use crate::errors::AppResult;
use crate::models::api::ApiResponse;
use crate::models::attendance::{AttendanceRecord, PunchRequest};
use crate::utils::date::to_iso;
use chrono::NaiveDate;

impl AttendanceApi for ApiClient {
    fn day_attendance(&self, employee_id: i64, date: NaiveDate) -> AppResult<AttendanceRecord> {
        let day = to_iso(date);
        let resp: ApiResponse<Vec<AttendanceRecord>> = self.get(
            "/Attendances",
            &[
                ("startDate", day.clone()),
                ("endDate", day.clone()),
                ("employeeId", employee_id.to_string()),
            ],
        )?;
        Ok(resp
            .data
            .into_iter()
            .next()
            .unwrap_or_else(|| AttendanceRecord::empty(&day)))
    }

    fn check_in(&self, req: &PunchRequest) -> AppResult<String> {
        let resp: ApiResponse<Option<AttendanceRecord>> =
            self.post("/Attendances/startTimer", req)?;
        Ok(resp.message)
    }

    fn check_out(&self, req: &PunchRequest) -> AppResult<String> {
        let resp: ApiResponse<Option<AttendanceRecord>> =
            self.post("/Attendances/stopTimer", req)?;
        Ok(resp.message)
    }
}

impl ApiClient {
    pub fn weekly_attendance(&self) -> AppResult<Vec<AttendanceRecord>> {
        let resp: ApiResponse<Vec<AttendanceRecord>> = self.get("/Attendances/weekly", &[])?;
        Ok(resp.data)
    }

    pub fn monthly_attendance(&self, month: u32, year: i32) -> AppResult<Vec<AttendanceRecord>> {
        let resp: ApiResponse<Vec<AttendanceRecord>> = self.get(
            "/Attendances/monthly",
            &[("month", month.to_string()), ("year", year.to_string())],
        )?;
        Ok(resp.data)
    }
}
