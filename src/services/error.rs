//! Error taxonomy for scheduling operations.
//!
//! Every check failure aborts the enclosing operation with no partial write
//! and surfaces one of these kinds; the core never retries automatically.

use crate::api::{AdminId, MemberId, RoomId, SessionId, TrainerId};
use crate::db::repository::RepositoryError;

/// Result type for scheduling operations.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Error kinds for the scheduling core.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    /// End time is not after start time.
    #[error("End time must be after start time")]
    InvalidWindow,

    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("Trainer not found: {0}")]
    TrainerNotFound(TrainerId),

    #[error("Admin not found: {0}")]
    AdminNotFound(AdminId),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The session is CANCELLED, which is terminal: rescheduling and room
    /// assignment no longer accept it as a target.
    #[error("Session {0} is cancelled and can no longer be scheduled")]
    SessionCancelled(SessionId),

    /// New availability would overlap an existing slot of the same trainer
    /// (any status; a claimed window is never re-declarable).
    #[error("Availability overlaps with existing slots")]
    AvailabilityOverlap,

    /// No ACTIVE slot covers the requested window.
    #[error("Trainer is not available in this time window")]
    NoAvailability,

    /// Coverage was confirmed but no concrete slot could be selected for
    /// booking. Distinct from [`NoAvailability`] so the selection step
    /// reports honestly if the two queries ever diverge.
    ///
    /// [`NoAvailability`]: SchedulingError::NoAvailability
    #[error("No matching availability slot found to book")]
    NoMatchingSlot,

    /// The trainer already has a non-cancelled session overlapping the window.
    #[error("Trainer has another session in this time window")]
    TrainerConflict,

    /// The room already hosts a non-cancelled session overlapping the window.
    #[error("Room already booked for this time")]
    RoomConflict,

    /// The session does not belong to the acting member.
    #[error("Session {session} does not belong to member {member}")]
    NotOwner {
        session: SessionId,
        member: MemberId,
    },

    /// The supplied slot does not exist or belongs to another trainer.
    #[error("Invalid availability selection for this trainer")]
    SlotMismatch,

    /// The supplied slot is not ACTIVE or does not contain the new window.
    #[error("Selected availability does not cover the requested time window")]
    SlotDoesNotCover,

    /// Storage failure underneath a scheduling operation.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SchedulingError {
    /// True for the kinds that mean "the id did not resolve".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::TrainerNotFound(_)
                | Self::AdminNotFound(_)
                | Self::RoomNotFound(_)
                | Self::SessionNotFound(_)
        )
    }

    /// True for the kinds where a scheduling invariant would be violated.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AvailabilityOverlap | Self::TrainerConflict | Self::RoomConflict
        )
    }
}
