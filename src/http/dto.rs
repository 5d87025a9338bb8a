//! Data Transfer Objects for the HTTP API.
//!
//! The domain entities in `api` already derive Serialize/Deserialize and are
//! returned as-is; the request bodies and list envelopes live here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{PtSession, TrainerAvailability};

/// Request body for declaring a trainer availability slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddAvailabilityRequest {
    pub trainer_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Query parameters for the availability listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AvailabilityQuery {
    /// Restrict the listing to one trainer (optional)
    #[serde(default)]
    pub trainer_id: Option<i64>,
}

/// Availability listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityListResponse {
    pub slots: Vec<TrainerAvailability>,
    pub total: usize,
}

/// Request body for a member session request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSessionRequest {
    pub member_id: i64,
    pub trainer_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Request body for rescheduling a session onto a concrete slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleSessionRequest {
    pub availability_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Request body for a member cancelling their session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelSessionRequest {
    pub member_id: i64,
}

/// Request body for admin room assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRoomRequest {
    pub admin_id: i64,
    pub room_id: i64,
}

/// Trainer schedule response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerScheduleResponse {
    pub sessions: Vec<PtSession>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}
