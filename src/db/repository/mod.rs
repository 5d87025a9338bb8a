//! Repository traits and error types.
//!
//! The storage interface is split per concern (directories, availability
//! slots, sessions, transaction scopes) with [`ClubRepository`] as the
//! umbrella trait the service layer works against.

pub mod availability;
pub mod directory;
pub mod error;
pub mod sessions;

pub use availability::AvailabilityRepository;
pub use directory::DirectoryRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use sessions::{NewSession, SessionRepository};

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::api::{RoomId, TrainerId};

/// Guard for a transaction scope. While held, all mutating work for the
/// locked trainer (or room) is serialized, so a conflict check and the writes
/// that depend on it observe a consistent view.
pub type ScopeGuard = OwnedMutexGuard<()>;

/// Transaction scope acquisition.
///
/// The store is not required to be transactional; instead every mutating
/// operation locks the entity it examines (trainer for slot/session work,
/// trainer and room for room assignment) before reading, checking, and
/// writing. When both scopes are needed the trainer scope is always acquired
/// first, so acquisition cannot deadlock.
#[async_trait]
pub trait TransactionScopes: Send + Sync {
    /// Serialize scheduling work for one trainer.
    async fn lock_trainer(&self, id: TrainerId) -> ScopeGuard;

    /// Serialize room-assignment work for one room.
    async fn lock_room(&self, id: RoomId) -> ScopeGuard;
}

/// Umbrella trait combining all repository capabilities.
pub trait ClubRepository:
    DirectoryRepository + AvailabilityRepository + SessionRepository + TransactionScopes
{
}

impl<T> ClubRepository for T where
    T: DirectoryRepository + AvailabilityRepository + SessionRepository + TransactionScopes
{
}
