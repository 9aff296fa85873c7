pub mod location;
pub mod shell;
