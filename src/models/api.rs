use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard envelope returned by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: u16,
}

/// Paged envelope used by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub records: u32,
    #[serde(default)]
    pub total_records: u32,
    pub data: Vec<T>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: u16,
}

/// Error body shape; only `message` is relied upon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Identifier the server sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleId {
    Num(i64),
    Str(String),
}

impl fmt::Display for FlexibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexibleId::Num(n) => write!(f, "{}", n),
            FlexibleId::Str(s) => write!(f, "{}", s),
        }
    }
}
