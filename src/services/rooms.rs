//! Room assignment validator.
//!
//! Admin-side finalization of a pending session: links a room and the acting
//! admin, rejecting room-time conflicts, and moves the session to VALIDATED.
//! Room conflicts are independent of trainer-availability bookkeeping, so no
//! slot is touched here.

use tracing::info;

use super::error::{SchedulingError, SchedulingResult};
use crate::api::{AdminId, PtSession, RoomId, SessionId, SessionStatus};
use crate::db::repository::ClubRepository;

/// Admin assigns (or changes) the room for an existing session.
///
/// Fails if admin, session or room do not resolve, if the session is
/// CANCELLED (terminal), or if another non-cancelled session already occupies
/// that room over an overlapping interval. On success the session carries the
/// room and admin and its status becomes VALIDATED.
pub async fn assign_room(
    repo: &dyn ClubRepository,
    admin_id: AdminId,
    session_id: SessionId,
    room_id: RoomId,
) -> SchedulingResult<PtSession> {
    repo.get_admin(admin_id)
        .await?
        .ok_or(SchedulingError::AdminNotFound(admin_id))?;
    repo.get_room(room_id)
        .await?
        .ok_or(SchedulingError::RoomNotFound(room_id))?;

    // The session row is owned by the trainer scope (reschedule and cancel
    // run under it), so take that scope too or a concurrent cancel could be
    // clobbered by this write. Fixed acquisition order, trainer then room;
    // the scheduler never takes a room scope, so this cannot deadlock.
    let trainer_id = repo
        .get_session(session_id)
        .await?
        .ok_or(SchedulingError::SessionNotFound(session_id))?
        .trainer_id;

    let _trainer_scope = repo.lock_trainer(trainer_id).await;
    let _room_scope = repo.lock_room(room_id).await;

    let session = repo
        .get_session(session_id)
        .await?
        .ok_or(SchedulingError::SessionNotFound(session_id))?;

    if session.status == SessionStatus::Cancelled {
        return Err(SchedulingError::SessionCancelled(session_id));
    }

    // Room double-booking check, excluding the session being assigned.
    let occupants = repo.sessions_for_room(room_id).await?;
    let conflict = occupants.iter().any(|other| {
        other.id != session.id
            && other.status.occupies_schedule()
            && other.window.overlaps(&session.window)
    });
    if conflict {
        return Err(SchedulingError::RoomConflict);
    }

    let mut updated = session;
    updated.room_id = Some(room_id);
    updated.admin_id = Some(admin_id);
    updated.status = SessionStatus::Validated;
    let updated = repo.update_session(&updated).await?;

    info!(
        session = %updated.id,
        room = %room_id,
        admin = %admin_id,
        "room assigned, session validated"
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MemberId, TrainerId};
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::{DirectoryRepository, SessionRepository};
    use crate::services::availability::add_availability;
    use crate::services::scheduler::{cancel_session, request_session};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, h, m, 0).unwrap()
    }

    struct Fixture {
        repo: LocalRepository,
        member: MemberId,
        trainer: TrainerId,
        admin: AdminId,
        room: RoomId,
    }

    async fn fixture() -> Fixture {
        let repo = LocalRepository::new();
        let member = repo.insert_member("Mia", "mia@club.test").await.unwrap().id;
        let trainer = repo
            .insert_trainer("Dana", "dana@club.test")
            .await
            .unwrap()
            .id;
        let admin = repo.insert_admin("Alice Admin").await.unwrap().id;
        let room = repo.insert_room("PT_ROOM", 1).await.unwrap().id;
        Fixture {
            repo,
            member,
            trainer,
            admin,
            room,
        }
    }

    async fn pending_session(f: &Fixture, start_h: u32, end_h: u32) -> SessionId {
        add_availability(&f.repo, f.trainer, at(start_h, 0), at(end_h, 0))
            .await
            .unwrap();
        request_session(&f.repo, f.member, f.trainer, at(start_h, 0), at(end_h, 0))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_assign_room_validates_session() {
        let f = fixture().await;
        let session_id = pending_session(&f, 10, 11).await;

        let updated = assign_room(&f.repo, f.admin, session_id, f.room)
            .await
            .unwrap();
        assert_eq!(updated.status, SessionStatus::Validated);
        assert_eq!(updated.room_id, Some(f.room));
        assert_eq!(updated.admin_id, Some(f.admin));
    }

    #[tokio::test]
    async fn test_assign_room_rejects_overlap() {
        let f = fixture().await;
        let other_trainer = f
            .repo
            .insert_trainer("Zoe", "zoe@club.test")
            .await
            .unwrap()
            .id;

        let first = pending_session(&f, 10, 11).await;
        assign_room(&f.repo, f.admin, first, f.room).await.unwrap();

        // A different trainer, same room, overlapping time.
        add_availability(&f.repo, other_trainer, at(10, 30), at(11, 30))
            .await
            .unwrap();
        let second = request_session(&f.repo, f.member, other_trainer, at(10, 30), at(11, 30))
            .await
            .unwrap();

        let err = assign_room(&f.repo, f.admin, second.id, f.room)
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::RoomConflict));

        let unchanged = f.repo.get_session(second.id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, SessionStatus::Pending);
        assert!(unchanged.room_id.is_none());
    }

    #[tokio::test]
    async fn test_assign_room_allows_adjacent_sessions() {
        let f = fixture().await;
        let other_trainer = f
            .repo
            .insert_trainer("Zoe", "zoe@club.test")
            .await
            .unwrap()
            .id;

        let first = pending_session(&f, 10, 11).await;
        assign_room(&f.repo, f.admin, first, f.room).await.unwrap();

        add_availability(&f.repo, other_trainer, at(11, 0), at(12, 0))
            .await
            .unwrap();
        let second = request_session(&f.repo, f.member, other_trainer, at(11, 0), at(12, 0))
            .await
            .unwrap();

        let assigned = assign_room(&f.repo, f.admin, second.id, f.room).await;
        assert!(assigned.is_ok());
    }

    #[tokio::test]
    async fn test_assign_room_rejects_cancelled_session() {
        let f = fixture().await;
        let session_id = pending_session(&f, 10, 11).await;
        cancel_session(&f.repo, f.member, session_id).await.unwrap();

        let err = assign_room(&f.repo, f.admin, session_id, f.room)
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::SessionCancelled(_)));

        let unchanged = f.repo.get_session(session_id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, SessionStatus::Cancelled);
        assert!(unchanged.room_id.is_none());
    }

    #[tokio::test]
    async fn test_assign_room_unknown_ids() {
        let f = fixture().await;
        let session_id = pending_session(&f, 10, 11).await;

        let err = assign_room(&f.repo, AdminId::new(999), session_id, f.room)
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::AdminNotFound(_)));

        let err = assign_room(&f.repo, f.admin, session_id, RoomId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::RoomNotFound(_)));

        let err = assign_room(&f.repo, f.admin, SessionId::new(999), f.room)
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::SessionNotFound(_)));
    }
}
