pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod device;
pub mod leave;
pub mod log;
pub mod payslip;
pub mod session_clock;
pub mod tenant;
pub mod watch;
