use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Rejections from the roster service. Every variant is raised before the
/// roster is touched, so a failed call leaves the catalog unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled,

    #[error("Student not found in this activity")]
    NotEnrolled,

    #[error("Activity is full")]
    ActivityFull,
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadyEnrolled
            | RosterError::NotEnrolled
            | RosterError::ActivityFull => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("activity {activity:?} must allow at least one participant")]
    ZeroCapacity { activity: String },

    #[error("activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}
