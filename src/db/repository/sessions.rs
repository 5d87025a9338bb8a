//! Session repository trait for PT session storage.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{MemberId, PtSession, RoomId, SessionId, TimeWindow, TrainerId};

/// Fields for a session at creation time. Room and admin are always unset
/// until an admin validates the session, so they do not appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub member_id: MemberId,
    pub trainer_id: TrainerId,
    pub window: TimeWindow,
}

/// Repository trait for PT session storage.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session with status PENDING and return it with its id.
    async fn insert_session(&self, new: NewSession) -> RepositoryResult<PtSession>;

    /// Fetch a session by id. `Ok(None)` when the id does not exist.
    async fn get_session(&self, id: SessionId) -> RepositoryResult<Option<PtSession>>;

    /// Replace a session row with the given value (matched by `session.id`).
    async fn update_session(&self, session: &PtSession) -> RepositoryResult<PtSession>;

    /// All sessions for a trainer regardless of status.
    async fn sessions_for_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> RepositoryResult<Vec<PtSession>>;

    /// All sessions assigned to a room regardless of status.
    async fn sessions_for_room(&self, room_id: RoomId) -> RepositoryResult<Vec<PtSession>>;

    /// Non-cancelled sessions for a trainer ordered by start time.
    async fn trainer_schedule(&self, trainer_id: TrainerId) -> RepositoryResult<Vec<PtSession>>;
}
