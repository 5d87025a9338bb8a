//! Public API surface for the club scheduling backend.
//!
//! This file consolidates the domain entity types shared by the repository,
//! service, and HTTP layers. All types derive Serialize/Deserialize for JSON
//! serialization. Entity relationships are expressed as id references resolved
//! through repository lookups, never as nested objects.

use serde::{Deserialize, Serialize};

use crate::define_id_type;
pub use crate::models::TimeWindow;

define_id_type!(i64, MemberId);
define_id_type!(i64, TrainerId);
define_id_type!(i64, AdminId);
define_id_type!(i64, RoomId);
define_id_type!(i64, AvailabilityId);
define_id_type!(i64, SessionId);

/// Lifecycle state of a declared availability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    /// Open for booking.
    Active,
    /// Consumed by a pending or validated session.
    Booked,
}

/// Lifecycle state of a PT session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Requested by a member, awaiting admin room assignment.
    Pending,
    /// Room assigned; finalized for operational purposes.
    Validated,
    /// Cancelled by the member. Terminal for scheduling.
    Cancelled,
    /// Held and finished. Terminal; not produced by this core.
    Completed,
}

impl SessionStatus {
    /// Any non-cancelled session occupies its trainer's (and room's) time.
    pub fn occupies_schedule(&self) -> bool {
        !matches!(self, SessionStatus::Cancelled)
    }
}

/// A declared open interval during which a trainer can be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerAvailability {
    pub id: AvailabilityId,
    pub trainer_id: TrainerId,
    pub window: TimeWindow,
    pub status: AvailabilityStatus,
}

impl TrainerAvailability {
    pub fn is_active(&self) -> bool {
        self.status == AvailabilityStatus::Active
    }

    /// True iff this slot is ACTIVE and fully contains the requested window.
    pub fn covers(&self, window: &TimeWindow) -> bool {
        self.is_active() && self.window.contains(window)
    }
}

/// A concrete requested or booked meeting between one member and one trainer.
///
/// `room_id` and `admin_id` stay unset until an admin validates the session;
/// any reschedule clears them and resets the status to `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PtSession {
    pub id: SessionId,
    pub member_id: MemberId,
    pub trainer_id: TrainerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<AdminId>,
    pub window: TimeWindow,
    pub status: SessionStatus,
}

// ==================== Directory entities ====================
//
// The core only reads these; registration, profile edits and the rest of the
// member/trainer/admin CRUD live outside this crate.

/// A club member (read-only directory entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub full_name: String,
    pub email: String,
}

/// A personal trainer (read-only directory entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: TrainerId,
    pub full_name: String,
    pub email: String,
}

/// An operations admin (read-only directory entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: AdminId,
    pub full_name: String,
}

/// A bookable room (read-only directory entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_type: String,
    pub capacity: i32,
}
