//! Domain errors for the meal sheet store.

use std::fmt;

use thiserror::Error;

/// The step of a store operation that a request belongs to.
///
/// Multi-request operations (`update`) report which of their requests
/// failed, so a caller can tell a failed clear from a torn write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fetching the scan range.
    Read,
    /// Append-style write of a new row.
    Append,
    /// Clearing the row span ahead of an update.
    ClearRow,
    /// Writing the replacement row of an update.
    WriteRow,
    /// Writing the header row.
    Initialize,
}

impl Phase {
    /// Short description used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "fetch data",
            Self::Append => "add meal",
            Self::ClearRow => "clear row",
            Self::WriteRow => "update meal",
            Self::Initialize => "initialize sheet",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed exchange as reported by a [`GridTransport`](crate::domain::ports::GridTransport).
///
/// Transports know nothing about phases; [`StoreError::from_failure`]
/// attaches the phase and classifies the status code.
#[derive(Debug, Error)]
pub enum GridFailure {
    /// The service answered with a non-success status.
    #[error("status {code} {text}")]
    Status { code: u16, text: String },

    /// No usable response: connection, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A request URL that could not be built, or a body that could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl GridFailure {
    /// Build a status failure from a numeric code and its reason phrase.
    pub fn status(code: u16, text: impl Into<String>) -> Self {
        Self::Status {
            code,
            text: text.into(),
        }
    }
}

/// Errors surfaced by every [`MealStore`](crate::domain::ports::MealStore) operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// API key or sheet id is missing. Raised before any request.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote status 403.
    #[error("Failed to {phase}: API key is invalid or doesn't have permission to access this sheet (403)")]
    AccessDenied { phase: Phase },

    /// Remote status 404.
    #[error("Failed to {phase}: sheet not found, check the sheet id (404)")]
    NotFound { phase: Phase },

    /// Any other non-success status.
    #[error("Failed to {phase}: {status} {status_text}")]
    RequestFailed {
        phase: Phase,
        status: u16,
        status_text: String,
    },

    /// The exchange itself did not complete.
    #[error("Failed to {phase}: {source}")]
    Transport {
        phase: Phase,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A success response whose body is not a value range.
    #[error("Failed to {phase}: malformed response: {message}")]
    MalformedResponse { phase: Phase, message: String },

    /// A position with no sheet row. Raised before any request.
    #[error("Position {position} is out of range")]
    PositionOutOfRange { position: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Attach a phase to a transport failure, mapping 403 and 404 to
    /// their dedicated variants.
    pub fn from_failure(phase: Phase, failure: GridFailure) -> Self {
        match failure {
            GridFailure::Status { code: 403, .. } => Self::AccessDenied { phase },
            GridFailure::Status { code: 404, .. } => Self::NotFound { phase },
            GridFailure::Status { code, text } => Self::RequestFailed {
                phase,
                status: code,
                status_text: text,
            },
            GridFailure::Transport(source) => Self::Transport { phase, source },
            GridFailure::Malformed(message) => Self::MalformedResponse { phase, message },
        }
    }

    /// The phase that failed, if the error came from a request.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Configuration(_) | Self::PositionOutOfRange { .. } => None,
            Self::AccessDenied { phase }
            | Self::NotFound { phase }
            | Self::RequestFailed { phase, .. }
            | Self::Transport { phase, .. }
            | Self::MalformedResponse { phase, .. } => Some(*phase),
        }
    }

    /// The remote status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AccessDenied { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
