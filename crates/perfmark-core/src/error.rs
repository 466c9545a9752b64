//! Shared error type across perfmark crates.
//!
//! The registry itself never fails; these errors come from the edges
//! (config loading, startup wiring).

use thiserror::Error;

/// Stable error codes for callers that match on strings (CLI exit output, logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config is malformed or out of range.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal / IO error.
    Internal,
}

impl ErrorCode {
    /// String representation used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PerfmarkError>;

/// Unified error type used by core and runtime.
#[derive(Debug, Error)]
pub enum PerfmarkError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PerfmarkError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            PerfmarkError::BadConfig(_) => ErrorCode::BadConfig,
            PerfmarkError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            PerfmarkError::Internal(_) => ErrorCode::Internal,
        }
    }
}
