//! In-memory repository implementation.
//!
//! Backs the default `local-repo` feature. All tables live behind a single
//! `parking_lot::RwLock`, so each individual repository call observes a
//! consistent snapshot; multi-step atomicity comes from the per-trainer and
//! per-room scope locks in [`TransactionScopes`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use crate::api::{
    Admin, AdminId, AvailabilityId, AvailabilityStatus, Member, MemberId, PtSession, Room, RoomId,
    SessionId, SessionStatus, TimeWindow, Trainer, TrainerAvailability, TrainerId,
};
use crate::db::repository::{
    AvailabilityRepository, DirectoryRepository, ErrorContext, NewSession, RepositoryError,
    RepositoryResult, ScopeGuard, SessionRepository, TransactionScopes,
};

#[derive(Default)]
struct Tables {
    members: HashMap<MemberId, Member>,
    trainers: HashMap<TrainerId, Trainer>,
    admins: HashMap<AdminId, Admin>,
    rooms: HashMap<RoomId, Room>,
    slots: HashMap<AvailabilityId, TrainerAvailability>,
    sessions: HashMap<SessionId, PtSession>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory repository for unit testing and local development.
pub struct LocalRepository {
    tables: RwLock<Tables>,
    trainer_locks: Mutex<HashMap<TrainerId, Arc<tokio::sync::Mutex<()>>>>,
    room_locks: Mutex<HashMap<RoomId, Arc<tokio::sync::Mutex<()>>>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            trainer_locks: Mutex::new(HashMap::new()),
            room_locks: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionScopes for LocalRepository {
    async fn lock_trainer(&self, id: TrainerId) -> ScopeGuard {
        // Clone the Arc before awaiting; the registry lock must not be held
        // across the await point.
        let mutex = {
            let mut locks = self.trainer_locks.lock();
            Arc::clone(locks.entry(id).or_default())
        };
        mutex.lock_owned().await
    }

    async fn lock_room(&self, id: RoomId) -> ScopeGuard {
        let mutex = {
            let mut locks = self.room_locks.lock();
            Arc::clone(locks.entry(id).or_default())
        };
        mutex.lock_owned().await
    }
}

#[async_trait]
impl DirectoryRepository for LocalRepository {
    async fn get_member(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        Ok(self.tables.read().members.get(&id).cloned())
    }

    async fn get_trainer(&self, id: TrainerId) -> RepositoryResult<Option<Trainer>> {
        Ok(self.tables.read().trainers.get(&id).cloned())
    }

    async fn get_admin(&self, id: AdminId) -> RepositoryResult<Option<Admin>> {
        Ok(self.tables.read().admins.get(&id).cloned())
    }

    async fn get_room(&self, id: RoomId) -> RepositoryResult<Option<Room>> {
        Ok(self.tables.read().rooms.get(&id).cloned())
    }

    async fn insert_member(&self, full_name: &str, email: &str) -> RepositoryResult<Member> {
        let mut tables = self.tables.write();
        let member = Member {
            id: MemberId::new(tables.allocate_id()),
            full_name: full_name.to_string(),
            email: email.to_string(),
        };
        tables.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn insert_trainer(&self, full_name: &str, email: &str) -> RepositoryResult<Trainer> {
        let mut tables = self.tables.write();
        let trainer = Trainer {
            id: TrainerId::new(tables.allocate_id()),
            full_name: full_name.to_string(),
            email: email.to_string(),
        };
        tables.trainers.insert(trainer.id, trainer.clone());
        Ok(trainer)
    }

    async fn insert_admin(&self, full_name: &str) -> RepositoryResult<Admin> {
        let mut tables = self.tables.write();
        let admin = Admin {
            id: AdminId::new(tables.allocate_id()),
            full_name: full_name.to_string(),
        };
        tables.admins.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn insert_room(&self, room_type: &str, capacity: i32) -> RepositoryResult<Room> {
        let mut tables = self.tables.write();
        let room = Room {
            id: RoomId::new(tables.allocate_id()),
            room_type: room_type.to_string(),
            capacity,
        };
        tables.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl AvailabilityRepository for LocalRepository {
    async fn insert_slot(
        &self,
        trainer_id: TrainerId,
        window: TimeWindow,
    ) -> RepositoryResult<TrainerAvailability> {
        let mut tables = self.tables.write();
        let slot = TrainerAvailability {
            id: AvailabilityId::new(tables.allocate_id()),
            trainer_id,
            window,
            status: AvailabilityStatus::Active,
        };
        tables.slots.insert(slot.id, slot.clone());
        Ok(slot)
    }

    async fn get_slot(&self, id: AvailabilityId) -> RepositoryResult<Option<TrainerAvailability>> {
        Ok(self.tables.read().slots.get(&id).cloned())
    }

    async fn slots_for_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> RepositoryResult<Vec<TrainerAvailability>> {
        let tables = self.tables.read();
        let mut slots: Vec<TrainerAvailability> = tables
            .slots
            .values()
            .filter(|s| s.trainer_id == trainer_id)
            .cloned()
            .collect();
        slots.sort_by_key(|s| s.window.start);
        Ok(slots)
    }

    async fn set_slot_status(
        &self,
        id: AvailabilityId,
        status: AvailabilityStatus,
    ) -> RepositoryResult<TrainerAvailability> {
        let mut tables = self.tables.write();
        let slot = tables.slots.get_mut(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "availability slot does not exist",
                ErrorContext::new("set_slot_status")
                    .with_entity("availability")
                    .with_entity_id(id),
            )
        })?;
        slot.status = status;
        Ok(slot.clone())
    }

    async fn list_active_slots(
        &self,
        trainer_id: Option<TrainerId>,
    ) -> RepositoryResult<Vec<TrainerAvailability>> {
        let tables = self.tables.read();
        let mut slots: Vec<TrainerAvailability> = tables
            .slots
            .values()
            .filter(|s| s.status == AvailabilityStatus::Active)
            .filter(|s| trainer_id.is_none_or(|t| s.trainer_id == t))
            .cloned()
            .collect();
        // Presentation ordering: trainer name, then start time.
        slots.sort_by(|a, b| {
            let name_a = tables.trainers.get(&a.trainer_id).map(|t| t.full_name.as_str());
            let name_b = tables.trainers.get(&b.trainer_id).map(|t| t.full_name.as_str());
            name_a
                .cmp(&name_b)
                .then_with(|| a.window.start.cmp(&b.window.start))
        });
        Ok(slots)
    }
}

#[async_trait]
impl SessionRepository for LocalRepository {
    async fn insert_session(&self, new: NewSession) -> RepositoryResult<PtSession> {
        let mut tables = self.tables.write();
        let session = PtSession {
            id: SessionId::new(tables.allocate_id()),
            member_id: new.member_id,
            trainer_id: new.trainer_id,
            room_id: None,
            admin_id: None,
            window: new.window,
            status: SessionStatus::Pending,
        };
        tables.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_session(&self, id: SessionId) -> RepositoryResult<Option<PtSession>> {
        Ok(self.tables.read().sessions.get(&id).cloned())
    }

    async fn update_session(&self, session: &PtSession) -> RepositoryResult<PtSession> {
        let mut tables = self.tables.write();
        if !tables.sessions.contains_key(&session.id) {
            return Err(RepositoryError::not_found_with_context(
                "session does not exist",
                ErrorContext::new("update_session")
                    .with_entity("session")
                    .with_entity_id(session.id),
            ));
        }
        tables.sessions.insert(session.id, session.clone());
        Ok(session.clone())
    }

    async fn sessions_for_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> RepositoryResult<Vec<PtSession>> {
        let tables = self.tables.read();
        let mut sessions: Vec<PtSession> = tables
            .sessions
            .values()
            .filter(|s| s.trainer_id == trainer_id)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.window.start);
        Ok(sessions)
    }

    async fn sessions_for_room(&self, room_id: RoomId) -> RepositoryResult<Vec<PtSession>> {
        let tables = self.tables.read();
        let mut sessions: Vec<PtSession> = tables
            .sessions
            .values()
            .filter(|s| s.room_id == Some(room_id))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.window.start);
        Ok(sessions)
    }

    async fn trainer_schedule(&self, trainer_id: TrainerId) -> RepositoryResult<Vec<PtSession>> {
        let tables = self.tables.read();
        let mut sessions: Vec<PtSession> = tables
            .sessions
            .values()
            .filter(|s| s.trainer_id == trainer_id && s.status.occupies_schedule())
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.window.start);
        Ok(sessions)
    }
}
