pub mod api;
pub mod attendance;
pub mod dashboard;
pub mod leave;
pub mod notification;
pub mod payslip;
pub mod tenant;
pub mod user;
