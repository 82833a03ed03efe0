//! Error types for ingestion calls.

use thiserror::Error;

/// Errors returned by an [`IngestSink`](crate::IngestSink).
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        body: String,
    },
}

impl IngestError {
    /// Build a status error with an operator-facing message.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        IngestError::Status {
            status,
            message: status_message(status),
            body: body.into(),
        }
    }

    /// HTTP status of the failed call, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            IngestError::Status { status, .. } => Some(*status),
            IngestError::Transport(e) => e.status().map(|s| s.as_u16()),
            IngestError::InvalidUrl { .. } => None,
        }
    }
}

/// Map an HTTP status to a human-readable message.
pub fn status_message(status: u16) -> String {
    match status {
        400 => "Invalid request. Please check your input and try again.".to_string(),
        401 => "Authentication required. Please log in and try again.".to_string(),
        403 => "Access denied. You don't have permission to perform this action.".to_string(),
        404 => "Resource not found. The requested item may have been deleted.".to_string(),
        409 => "Conflict. The resource already exists or is in use.".to_string(),
        422 => "Validation error. Please check your input and try again.".to_string(),
        429 => "Too many requests. Please wait a moment and try again.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        502..=504 => "Service temporarily unavailable. Please try again later.".to_string(),
        other => format!("Request failed ({other}). Please try again."),
    }
}
