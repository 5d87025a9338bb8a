//! Session scheduler.
//!
//! Owns the member-driven PT session lifecycle: request, reschedule, cancel.
//! Coordinates with the availability ledger to consume and release slots, and
//! enforces the trainer double-booking rule against all non-cancelled
//! sessions. Every operation runs under the trainer's transaction scope: all
//! reads and checks happen first, writes only after every check has passed,
//! so a failure never leaves partial state.

use chrono::{DateTime, Utc};
use tracing::info;

use super::availability::{
    consume_slot, find_booked_slot_covering, find_covering_active_slot, release_slot,
};
use super::error::{SchedulingError, SchedulingResult};
use crate::api::{
    AvailabilityId, MemberId, PtSession, SessionId, SessionStatus, TimeWindow, TrainerId,
};
use crate::db::repository::{ClubRepository, NewSession};

/// Member requests a PT session with a trainer over `[start, end)`.
///
/// Requires an ACTIVE availability slot covering the window and no
/// non-cancelled session of the trainer overlapping it. On success the
/// earliest-starting covering slot is marked BOOKED and a PENDING session is
/// created with room and admin unset.
pub async fn request_session(
    repo: &dyn ClubRepository,
    member_id: MemberId,
    trainer_id: TrainerId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> SchedulingResult<PtSession> {
    let window = TimeWindow::new(start, end);
    if !window.is_valid() {
        return Err(SchedulingError::InvalidWindow);
    }

    let _scope = repo.lock_trainer(trainer_id).await;

    repo.get_member(member_id)
        .await?
        .ok_or(SchedulingError::MemberNotFound(member_id))?;
    repo.get_trainer(trainer_id)
        .await?
        .ok_or(SchedulingError::TrainerNotFound(trainer_id))?;

    if find_covering_active_slot(repo, trainer_id, &window)
        .await?
        .is_none()
    {
        return Err(SchedulingError::NoAvailability);
    }

    if trainer_has_conflict(repo, trainer_id, &window, None).await? {
        return Err(SchedulingError::TrainerConflict);
    }

    // Select one concrete slot to book, earliest start first.
    let slot = find_covering_active_slot(repo, trainer_id, &window)
        .await?
        .ok_or(SchedulingError::NoMatchingSlot)?;

    // All checks passed; writes cannot fail past this point.
    consume_slot(repo, slot.id).await?;
    let session = repo
        .insert_session(NewSession {
            member_id,
            trainer_id,
            window,
        })
        .await?;

    info!(
        session = %session.id,
        member = %member_id,
        trainer = %trainer_id,
        slot = %slot.id,
        window = %window,
        "session requested"
    );
    Ok(session)
}

/// Member reschedules an existing session onto a concrete availability slot.
///
/// The supplied slot must belong to the session's trainer, be ACTIVE, and
/// fully contain the new window. The trainer conflict check excludes the
/// session itself. The old BOOKED slot covering the previous window is
/// released best-effort (a booking predating strict slot tracking may not
/// have one). Any in-flight validation is invalidated: room and admin are
/// cleared and the status goes back to PENDING. A CANCELLED session is
/// terminal and cannot be rescheduled.
pub async fn reschedule_session(
    repo: &dyn ClubRepository,
    session_id: SessionId,
    availability_id: AvailabilityId,
    new_start: DateTime<Utc>,
    new_end: DateTime<Utc>,
) -> SchedulingResult<PtSession> {
    let new_window = TimeWindow::new(new_start, new_end);
    if !new_window.is_valid() {
        return Err(SchedulingError::InvalidWindow);
    }

    // First load resolves the trainer so the scope can be locked; the session
    // is re-read under the lock before anything is decided on it.
    let trainer_id = repo
        .get_session(session_id)
        .await?
        .ok_or(SchedulingError::SessionNotFound(session_id))?
        .trainer_id;

    let _scope = repo.lock_trainer(trainer_id).await;

    let session = repo
        .get_session(session_id)
        .await?
        .ok_or(SchedulingError::SessionNotFound(session_id))?;

    if session.status == SessionStatus::Cancelled {
        return Err(SchedulingError::SessionCancelled(session_id));
    }

    let new_slot = repo
        .get_slot(availability_id)
        .await?
        .filter(|slot| slot.trainer_id == session.trainer_id)
        .ok_or(SchedulingError::SlotMismatch)?;

    if !new_slot.covers(&new_window) {
        return Err(SchedulingError::SlotDoesNotCover);
    }

    if trainer_has_conflict(repo, session.trainer_id, &new_window, Some(session.id)).await? {
        return Err(SchedulingError::TrainerConflict);
    }

    let old_slot = find_booked_slot_covering(repo, session.trainer_id, &session.window).await?;

    // Checks done; apply the writes.
    if let Some(old_slot) = &old_slot {
        release_slot(repo, old_slot.id).await?;
    }
    consume_slot(repo, new_slot.id).await?;

    let mut updated = session;
    updated.window = new_window;
    updated.room_id = None;
    updated.admin_id = None;
    updated.status = SessionStatus::Pending;
    let updated = repo.update_session(&updated).await?;

    info!(
        session = %updated.id,
        slot = %new_slot.id,
        window = %new_window,
        released = old_slot.map(|s| s.id.value()),
        "session rescheduled"
    );
    Ok(updated)
}

/// Member cancels their own session.
///
/// The BOOKED slot covering the session's window is released best-effort;
/// the session status becomes CANCELLED, terminal for scheduling purposes.
/// Cancelling twice never errors and never double-releases.
pub async fn cancel_session(
    repo: &dyn ClubRepository,
    member_id: MemberId,
    session_id: SessionId,
) -> SchedulingResult<PtSession> {
    let trainer_id = repo
        .get_session(session_id)
        .await?
        .ok_or(SchedulingError::SessionNotFound(session_id))?
        .trainer_id;

    let _scope = repo.lock_trainer(trainer_id).await;

    let session = repo
        .get_session(session_id)
        .await?
        .ok_or(SchedulingError::SessionNotFound(session_id))?;

    if session.member_id != member_id {
        return Err(SchedulingError::NotOwner {
            session: session_id,
            member: member_id,
        });
    }

    if let Some(slot) = find_booked_slot_covering(repo, session.trainer_id, &session.window).await?
    {
        release_slot(repo, slot.id).await?;
    }

    let mut updated = session;
    updated.status = SessionStatus::Cancelled;
    let updated = repo.update_session(&updated).await?;

    info!(session = %updated.id, member = %member_id, "session cancelled");
    Ok(updated)
}

/// Non-cancelled sessions for a trainer ordered by start time.
pub async fn trainer_schedule(
    repo: &dyn ClubRepository,
    trainer_id: TrainerId,
) -> SchedulingResult<Vec<PtSession>> {
    Ok(repo.trainer_schedule(trainer_id).await?)
}

/// A trainer has a conflict when any of their non-cancelled sessions
/// (PENDING, VALIDATED and COMPLETED all occupy the trainer's time) overlaps
/// the candidate window. `exclude` skips the session being rescheduled.
async fn trainer_has_conflict(
    repo: &dyn ClubRepository,
    trainer_id: TrainerId,
    window: &TimeWindow,
    exclude: Option<SessionId>,
) -> SchedulingResult<bool> {
    let sessions = repo.sessions_for_trainer(trainer_id).await?;
    Ok(sessions.iter().any(|session| {
        exclude != Some(session.id)
            && session.status.occupies_schedule()
            && session.window.overlaps(window)
    }))
}
