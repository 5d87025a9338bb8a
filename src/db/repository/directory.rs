//! Directory repository trait for member/trainer/admin/room lookups.
//!
//! The scheduling core only reads the directories; registration and profile
//! management happen outside this crate. The insert methods exist for demo
//! seeding and tests.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Admin, AdminId, Member, MemberId, Room, RoomId, Trainer, TrainerId};

/// Repository trait for directory lookups.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Resolve a member by id. `Ok(None)` when the id does not exist.
    async fn get_member(&self, id: MemberId) -> RepositoryResult<Option<Member>>;

    /// Resolve a trainer by id.
    async fn get_trainer(&self, id: TrainerId) -> RepositoryResult<Option<Trainer>>;

    /// Resolve an admin by id.
    async fn get_admin(&self, id: AdminId) -> RepositoryResult<Option<Admin>>;

    /// Resolve a room by id.
    async fn get_room(&self, id: RoomId) -> RepositoryResult<Option<Room>>;

    /// Insert a member (seeding/tests only).
    async fn insert_member(&self, full_name: &str, email: &str) -> RepositoryResult<Member>;

    /// Insert a trainer (seeding/tests only).
    async fn insert_trainer(&self, full_name: &str, email: &str) -> RepositoryResult<Trainer>;

    /// Insert an admin (seeding/tests only).
    async fn insert_admin(&self, full_name: &str) -> RepositoryResult<Admin>;

    /// Insert a room (seeding/tests only).
    async fn insert_room(&self, room_type: &str, capacity: i32) -> RepositoryResult<Room>;

    /// Verify the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
