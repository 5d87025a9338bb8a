//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::SchedulingError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Internal server error
    Internal(String),
    /// Scheduling operation failure
    Scheduling(SchedulingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Scheduling(e) => scheduling_response(e),
        };

        (status, Json(error)).into_response()
    }
}

/// Map each scheduling error kind to a status code and stable error code.
fn scheduling_response(err: SchedulingError) -> (StatusCode, ApiError) {
    use SchedulingError::*;

    let message = err.to_string();
    let (status, code) = match &err {
        InvalidWindow => (StatusCode::BAD_REQUEST, "INVALID_WINDOW"),
        MemberNotFound(_) | TrainerNotFound(_) | AdminNotFound(_) | RoomNotFound(_)
        | SessionNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        SessionCancelled(_) => (StatusCode::CONFLICT, "SESSION_CANCELLED"),
        AvailabilityOverlap => (StatusCode::CONFLICT, "AVAILABILITY_OVERLAP"),
        NoAvailability => (StatusCode::CONFLICT, "NO_AVAILABILITY"),
        NoMatchingSlot => (StatusCode::CONFLICT, "NO_MATCHING_SLOT"),
        TrainerConflict => (StatusCode::CONFLICT, "TRAINER_CONFLICT"),
        RoomConflict => (StatusCode::CONFLICT, "ROOM_CONFLICT"),
        NotOwner { .. } => (StatusCode::FORBIDDEN, "NOT_OWNER"),
        SlotMismatch => (StatusCode::CONFLICT, "SLOT_MISMATCH"),
        SlotDoesNotCover => (StatusCode::CONFLICT, "SLOT_DOES_NOT_COVER"),
        Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "REPOSITORY_ERROR"),
    };

    (status, ApiError::new(code, message))
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        AppError::Scheduling(err)
    }
}

impl From<crate::db::repository::RepositoryError> for AppError {
    fn from(err: crate::db::repository::RepositoryError) -> Self {
        AppError::Scheduling(SchedulingError::Repository(err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
