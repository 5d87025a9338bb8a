//! Availability repository trait for trainer availability slots.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{AvailabilityId, AvailabilityStatus, TimeWindow, TrainerAvailability, TrainerId};

/// Repository trait for availability slot storage.
///
/// Slot status is only ever mutated through [`set_slot_status`]; slots are
/// never deleted in the normal flow.
///
/// [`set_slot_status`]: AvailabilityRepository::set_slot_status
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Persist a new slot with status ACTIVE and return it with its assigned id.
    async fn insert_slot(
        &self,
        trainer_id: TrainerId,
        window: TimeWindow,
    ) -> RepositoryResult<TrainerAvailability>;

    /// Fetch a slot by id. `Ok(None)` when the id does not exist.
    async fn get_slot(&self, id: AvailabilityId) -> RepositoryResult<Option<TrainerAvailability>>;

    /// All slots for a trainer regardless of status, ordered by start time.
    async fn slots_for_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> RepositoryResult<Vec<TrainerAvailability>>;

    /// Set a slot's status, returning the updated slot.
    ///
    /// Setting a status the slot already has is a no-op, not an error.
    async fn set_slot_status(
        &self,
        id: AvailabilityId,
        status: AvailabilityStatus,
    ) -> RepositoryResult<TrainerAvailability>;

    /// ACTIVE slots, optionally filtered by trainer, ordered by trainer name
    /// then start time (presentation ordering).
    async fn list_active_slots(
        &self,
        trainer_id: Option<TrainerId>,
    ) -> RepositoryResult<Vec<TrainerAvailability>>;
}
