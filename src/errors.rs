//! Unified application error type.
//! Every layer (db, api, core, cli) returns AppError so failures reach the
//! command dispatcher in one shape and are printed once by `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / local store
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Session expired or invalid, please log in again")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not logged in: run `hrdesk login` first")]
    NotLoggedIn,

    // ---------------------------
    // Device capabilities
    // ---------------------------
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Failed to update attendance: {0}. Please try again.")]
    PunchFailed(String),

    // ---------------------------
    // Domain rules
    // ---------------------------
    #[error("Cannot switch to inactive organization {0}. Please activate it first.")]
    InactiveTenant(i64),

    #[error("Unknown organization: {0}")]
    UnknownTenant(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Response discarded: session context changed while the request was in flight")]
    StaleContext,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Network(format!("request timed out: {e}"))
        } else {
            AppError::Network(e.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
