use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    FailedPrecondition,
    Unavailable,
}

impl ErrorCode {
    /// HTTP status the REST layer answers with for this code.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::InvalidArgument => 400,
            ErrorCode::FailedPrecondition => 500,
            ErrorCode::Unavailable => 502,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::FailedPrecondition => "FAILED_PRECONDITION",
            ErrorCode::Unavailable => "UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

pub trait IdeagraphError: std::error::Error {
    fn error_code(&self) -> ErrorCode;
}
