use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::api::ApiResponse;
use crate::models::payslip::Payslip;

impl ApiClient {
    pub fn payslips(&self) -> AppResult<Vec<Payslip>> {
        self.get("/Payroll/payslips", &[])
    }

    pub fn payslip_for(&self, month: u32, year: i32, user_id: i64) -> AppResult<Payslip> {
        let resp: ApiResponse<Payslip> = self.get(
            "/Payroll/payslip",
            &month_query(month, year, user_id),
        )?;
        Ok(resp.data)
    }

    /// PDF bytes of the payslip; an empty body is an error.
    pub fn payslip_pdf(&self, month: u32, year: i32, user_id: i64) -> AppResult<Vec<u8>> {
        let bytes = self.get_bytes(
            "/Payroll/payslip/download",
            &month_query(month, year, user_id),
            "application/pdf",
        )?;
        if bytes.is_empty() {
            return Err(AppError::Api {
                status: 200,
                message: "Downloaded file is empty".into(),
            });
        }
        Ok(bytes)
    }
}

fn month_query(month: u32, year: i32, user_id: i64) -> [(&'static str, String); 3] {
    [
        ("month", month.to_string()),
        ("year", year.to_string()),
        ("userId", user_id.to_string()),
    ]
}
