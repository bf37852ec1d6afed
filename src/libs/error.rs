//! Error taxonomy of the attendance helper.
//!
//! Every helper operation returns [`AttendanceResult`], so callers can match
//! on the failure kind instead of unwinding through layers of handlers. None
//! of these errors is retried automatically; each one waits for the user to
//! act again.

use crate::libs::punch::PunchState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttendanceError {
    /// The request never reached the server (timeout, DNS, offline).
    #[error("No response from server: {0}")]
    Network(String),

    /// HTTP 401. The cached credentials are no longer valid.
    #[error("Session expired, please log in again")]
    Auth,

    /// Any other non-success response, surfaced verbatim.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Punch-out was requested while no attendance record is tracked.
    #[error("No active attendance record found")]
    MissingRecord,

    /// The server answered with a body the helper cannot interpret.
    #[error("Invalid data format received from server: {0}")]
    InvalidShape(String),

    #[error("Cannot {action} while {state}")]
    InvalidTransition { action: &'static str, state: PunchState },
}

impl AttendanceError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AttendanceError::Auth)
    }
}

pub type AttendanceResult<T> = Result<T, AttendanceError>;
