//! Availability ledger.
//!
//! Owns trainer availability slots: creation with overlap rejection, the
//! covering-slot query used by the scheduler, the ACTIVE↔BOOKED status flips,
//! and the presentation listing.

use chrono::{DateTime, Utc};
use tracing::info;

use super::error::{SchedulingError, SchedulingResult};
use crate::api::{
    AvailabilityId, AvailabilityStatus, TimeWindow, TrainerAvailability, TrainerId,
};
use crate::db::repository::ClubRepository;

/// Declare a new availability slot for a trainer.
///
/// Fails if the window is invalid, the trainer does not exist, or the window
/// overlaps ANY existing slot of that trainer regardless of status. Once a
/// window has been claimed it can never be re-declared, even after the slot
/// was freed. The new slot persists with status ACTIVE.
pub async fn add_availability(
    repo: &dyn ClubRepository,
    trainer_id: TrainerId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> SchedulingResult<TrainerAvailability> {
    let window = TimeWindow::new(start, end);
    if !window.is_valid() {
        return Err(SchedulingError::InvalidWindow);
    }

    let _scope = repo.lock_trainer(trainer_id).await;

    repo.get_trainer(trainer_id)
        .await?
        .ok_or(SchedulingError::TrainerNotFound(trainer_id))?;

    let existing = repo.slots_for_trainer(trainer_id).await?;
    if existing.iter().any(|slot| slot.window.overlaps(&window)) {
        return Err(SchedulingError::AvailabilityOverlap);
    }

    let slot = repo.insert_slot(trainer_id, window).await?;
    info!(trainer = %trainer_id, slot = %slot.id, window = %slot.window, "availability added");
    Ok(slot)
}

/// Find the earliest-starting ACTIVE slot of the trainer whose interval fully
/// contains `window`. Deterministic tie-break: `slots_for_trainer` returns
/// slots ordered by start time. Read-only.
pub async fn find_covering_active_slot(
    repo: &dyn ClubRepository,
    trainer_id: TrainerId,
    window: &TimeWindow,
) -> SchedulingResult<Option<TrainerAvailability>> {
    let slots = repo.slots_for_trainer(trainer_id).await?;
    Ok(slots.into_iter().find(|slot| slot.covers(window)))
}

/// Find the earliest-starting BOOKED slot of the trainer whose interval fully
/// contains `window`. Used to locate the slot a session consumed.
pub async fn find_booked_slot_covering(
    repo: &dyn ClubRepository,
    trainer_id: TrainerId,
    window: &TimeWindow,
) -> SchedulingResult<Option<TrainerAvailability>> {
    let slots = repo.slots_for_trainer(trainer_id).await?;
    Ok(slots
        .into_iter()
        .find(|slot| slot.status == AvailabilityStatus::Booked && slot.window.contains(window)))
}

/// Mark a slot BOOKED. Idempotent when the slot is already BOOKED.
pub async fn consume_slot(
    repo: &dyn ClubRepository,
    slot_id: AvailabilityId,
) -> SchedulingResult<TrainerAvailability> {
    Ok(repo
        .set_slot_status(slot_id, AvailabilityStatus::Booked)
        .await?)
}

/// Mark a slot ACTIVE again. Idempotent when the slot is already ACTIVE.
pub async fn release_slot(
    repo: &dyn ClubRepository,
    slot_id: AvailabilityId,
) -> SchedulingResult<TrainerAvailability> {
    Ok(repo
        .set_slot_status(slot_id, AvailabilityStatus::Active)
        .await?)
}

/// ACTIVE slots, optionally filtered to one trainer, ordered by trainer name
/// then start time. Presentation listing, not a scheduling decision.
pub async fn list_active_availability(
    repo: &dyn ClubRepository,
    trainer_id: Option<TrainerId>,
) -> SchedulingResult<Vec<TrainerAvailability>> {
    Ok(repo.list_active_slots(trainer_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::DirectoryRepository;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, h, m, 0).unwrap()
    }

    async fn repo_with_trainer() -> (LocalRepository, TrainerId) {
        let repo = LocalRepository::new();
        let trainer = repo.insert_trainer("Dana", "dana@club.test").await.unwrap();
        (repo, trainer.id)
    }

    #[tokio::test]
    async fn test_add_availability_rejects_inverted_window() {
        let (repo, trainer) = repo_with_trainer().await;
        let err = add_availability(&repo, trainer, at(11, 0), at(10, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidWindow));
    }

    #[tokio::test]
    async fn test_add_availability_unknown_trainer() {
        let repo = LocalRepository::new();
        let err = add_availability(&repo, TrainerId::new(42), at(10, 0), at(11, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::TrainerNotFound(_)));
    }

    #[tokio::test]
    async fn test_add_availability_rejects_overlap_even_with_booked_slot() {
        let (repo, trainer) = repo_with_trainer().await;
        let slot = add_availability(&repo, trainer, at(10, 0), at(12, 0))
            .await
            .unwrap();
        consume_slot(&repo, slot.id).await.unwrap();

        // Overlap is checked against all slots regardless of status.
        let err = add_availability(&repo, trainer, at(11, 0), at(13, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::AvailabilityOverlap));
    }

    #[tokio::test]
    async fn test_add_availability_allows_adjacent_windows() {
        let (repo, trainer) = repo_with_trainer().await;
        add_availability(&repo, trainer, at(10, 0), at(11, 0))
            .await
            .unwrap();
        // Half-open intervals: touching at 11:00 is not an overlap.
        let second = add_availability(&repo, trainer, at(11, 0), at(12, 0)).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_covering_slot_picks_earliest_start() {
        let (repo, trainer) = repo_with_trainer().await;
        let early = add_availability(&repo, trainer, at(8, 0), at(12, 0))
            .await
            .unwrap();
        add_availability(&repo, trainer, at(12, 0), at(16, 0))
            .await
            .unwrap();

        let window = TimeWindow::new(at(10, 0), at(11, 0));
        let found = find_covering_active_slot(&repo, trainer, &window)
            .await
            .unwrap()
            .expect("a covering slot exists");
        assert_eq!(found.id, early.id);
    }

    #[tokio::test]
    async fn test_covering_slot_ignores_booked() {
        let (repo, trainer) = repo_with_trainer().await;
        let slot = add_availability(&repo, trainer, at(10, 0), at(12, 0))
            .await
            .unwrap();
        consume_slot(&repo, slot.id).await.unwrap();

        let window = TimeWindow::new(at(10, 0), at(11, 0));
        let found = find_covering_active_slot(&repo, trainer, &window)
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_consume_and_release_are_idempotent() {
        let (repo, trainer) = repo_with_trainer().await;
        let slot = add_availability(&repo, trainer, at(10, 0), at(12, 0))
            .await
            .unwrap();

        let booked = consume_slot(&repo, slot.id).await.unwrap();
        assert_eq!(booked.status, AvailabilityStatus::Booked);
        let booked_again = consume_slot(&repo, slot.id).await.unwrap();
        assert_eq!(booked_again.status, AvailabilityStatus::Booked);

        let released = release_slot(&repo, slot.id).await.unwrap();
        assert_eq!(released.status, AvailabilityStatus::Active);
        let released_again = release_slot(&repo, slot.id).await.unwrap();
        assert_eq!(released_again.status, AvailabilityStatus::Active);
    }
}
