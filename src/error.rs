//! Unified error handling for gamed.
//!
//! Two error families: `DispatchError` for contract violations at the
//! dispatch entry points, and `CommandError` for failures raised inside a
//! command group's `handle`. Handler failures are contained by the
//! dispatcher and converted to a generic user-visible message; they never
//! reach the session layer.

use thiserror::Error;

/// Errors surfaced by the dispatch entry points.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The connection-scoped entry point was invoked without a connection.
    /// A caller bug, surfaced immediately rather than degraded.
    #[error("connection-scoped dispatch requires a connection")]
    MissingConnection,
}

impl DispatchError {
    /// Static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingConnection => "missing_connection",
        }
    }
}

/// Errors that can occur inside a command group handler.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("not enough parameters")]
    NeedMoreParams,

    #[error("access denied")]
    AccessDenied,

    #[error("internal error: {0}")]
    Internal(String),
}

impl CommandError {
    /// Static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams => "need_more_params",
            Self::AccessDenied => "access_denied",
            Self::Internal(_) => "internal_error",
        }
    }
}
