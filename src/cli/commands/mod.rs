pub mod attendance;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod device;
pub mod init;
pub mod leave;
pub mod log;
pub mod notifications;
pub mod payslip;
pub mod tenant;
