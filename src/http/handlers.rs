//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    AddAvailabilityRequest, AssignRoomRequest, AvailabilityListResponse, AvailabilityQuery,
    CancelSessionRequest, HealthResponse, RequestSessionRequest, RescheduleSessionRequest,
    TrainerScheduleResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    AdminId, AvailabilityId, MemberId, PtSession, RoomId, SessionId, TrainerAvailability,
    TrainerId,
};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Availability
// =============================================================================

/// POST /v1/availability
///
/// Trainer declares a new availability slot.
pub async fn add_availability(
    State(state): State<AppState>,
    Json(request): Json<AddAvailabilityRequest>,
) -> HandlerResult<TrainerAvailability> {
    let slot = services::add_availability(
        state.repository.as_ref(),
        TrainerId::new(request.trainer_id),
        request.start,
        request.end,
    )
    .await?;
    Ok(Json(slot))
}

/// GET /v1/availability
///
/// List ACTIVE availability slots, optionally filtered by trainer.
pub async fn list_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> HandlerResult<AvailabilityListResponse> {
    let slots = services::list_active_availability(
        state.repository.as_ref(),
        query.trainer_id.map(TrainerId::new),
    )
    .await?;
    let total = slots.len();
    Ok(Json(AvailabilityListResponse { slots, total }))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /v1/sessions
///
/// Member requests a PT session with a trainer.
pub async fn request_session(
    State(state): State<AppState>,
    Json(request): Json<RequestSessionRequest>,
) -> HandlerResult<PtSession> {
    let session = services::request_session(
        state.repository.as_ref(),
        MemberId::new(request.member_id),
        TrainerId::new(request.trainer_id),
        request.start,
        request.end,
    )
    .await?;
    Ok(Json(session))
}

/// POST /v1/sessions/{session_id}/reschedule
///
/// Member reschedules an existing session onto a concrete availability slot.
pub async fn reschedule_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Json(request): Json<RescheduleSessionRequest>,
) -> HandlerResult<PtSession> {
    let session = services::reschedule_session(
        state.repository.as_ref(),
        SessionId::new(session_id),
        AvailabilityId::new(request.availability_id),
        request.start,
        request.end,
    )
    .await?;
    Ok(Json(session))
}

/// POST /v1/sessions/{session_id}/cancel
///
/// Member cancels their own session.
pub async fn cancel_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Json(request): Json<CancelSessionRequest>,
) -> HandlerResult<PtSession> {
    let session = services::cancel_session(
        state.repository.as_ref(),
        MemberId::new(request.member_id),
        SessionId::new(session_id),
    )
    .await?;
    Ok(Json(session))
}

/// POST /v1/sessions/{session_id}/room
///
/// Admin assigns a room to a pending session, validating it.
pub async fn assign_room(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Json(request): Json<AssignRoomRequest>,
) -> HandlerResult<PtSession> {
    let session = services::assign_room(
        state.repository.as_ref(),
        AdminId::new(request.admin_id),
        SessionId::new(session_id),
        RoomId::new(request.room_id),
    )
    .await?;
    Ok(Json(session))
}

/// GET /v1/trainers/{trainer_id}/schedule
///
/// Non-cancelled sessions for a trainer, ordered by start time.
pub async fn trainer_schedule(
    State(state): State<AppState>,
    Path(trainer_id): Path<i64>,
) -> HandlerResult<TrainerScheduleResponse> {
    let sessions =
        services::trainer_schedule(state.repository.as_ref(), TrainerId::new(trainer_id)).await?;
    let total = sessions.len();
    Ok(Json(TrainerScheduleResponse { sessions, total }))
}
