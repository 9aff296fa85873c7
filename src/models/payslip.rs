use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub id: i64,
    #[serde(default)]
    pub payroll_run_id: i64,
    #[serde(default)]
    pub employee_id: i64,
    #[serde(default)]
    pub employee_number: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub paid_days: f64,
    #[serde(default)]
    pub lop_days: f64,
    #[serde(default)]
    pub pay_date: String,
    #[serde(default)]
    pub pay_start_date: String,
    #[serde(default)]
    pub pay_end_date: String,
    #[serde(default)]
    pub gross_earnings: f64,
    #[serde(default)]
    pub deductions: f64,
    #[serde(default)]
    pub taxes: f64,
    #[serde(default)]
    pub total_net_payable: f64,
    #[serde(default)]
    pub payment_status: bool,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub payslip_components: Vec<PayslipComponent>,
    #[serde(default)]
    pub payslip_deductions: Vec<PayslipDeduction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipComponent {
    #[serde(default)]
    pub salary_component_name: String,
    #[serde(default)]
    pub is_fixed_pay: bool,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipDeduction {
    #[serde(default)]
    pub tenant_deduction_name: String,
    #[serde(default)]
    pub amount: f64,
}
