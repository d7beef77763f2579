use crate::models::GoalKind;
use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Entity creation and mutation failures. The operation is aborted with no
/// partial state change.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    MissingScheduledTime,
    NonPositiveTarget(GoalKind),
    DuplicateGoal(GoalKind),
    NonPositiveGroupTarget,
    TooFewMembers,
    UnknownHabit(String),
    NotDailyHabit(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::MissingScheduledTime => write!(f, "scheduled habits need a time of day"),
            Self::NonPositiveTarget(kind) => {
                write!(f, "{kind} goal target must be a positive integer")
            }
            Self::DuplicateGoal(kind) => write!(f, "habit already has a {kind} goal"),
            Self::NonPositiveGroupTarget => write!(f, "group target must be a positive integer"),
            Self::TooFewMembers => write!(f, "grouped goals need at least 2 distinct habits"),
            Self::UnknownHabit(id) => write!(f, "no habit with id '{id}'"),
            Self::NotDailyHabit(id) => write!(f, "habit '{id}' is not a daily habit"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raised when persisted slots cannot be read or parsed. Malformed data
/// aborts startup instead of being silently replaced.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Malformed {
        slot: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store I/O error: {err}"),
            Self::Malformed { slot, source } => {
                write!(f, "store slot '{slot}' holds malformed data: {source}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
