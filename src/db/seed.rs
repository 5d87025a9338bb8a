//! Demo data seeding.
//!
//! Populates the directories (members, trainers, admins, rooms) so a freshly
//! started server with the in-memory backend is immediately usable. Gated
//! behind `SEED_DEMO_DATA=1` in the server binary.

use tracing::info;

use super::repository::{ClubRepository, RepositoryResult};

/// Insert a small demo directory. Idempotency is not a concern here: the
/// in-memory store starts empty on every process start.
pub async fn seed_demo_data(repo: &dyn ClubRepository) -> RepositoryResult<()> {
    repo.insert_admin("Alice Admin").await?;
    repo.insert_admin("Bob Admin").await?;

    repo.insert_trainer("Tom Trainer", "tom.trainer@example.com")
        .await?;
    repo.insert_trainer("Tina Trainer", "tina.trainer@example.com")
        .await?;

    repo.insert_member("Mia Member", "mia.member@example.com")
        .await?;
    repo.insert_member("Max Member", "max.member@example.com")
        .await?;

    repo.insert_room("PT_ROOM", 1).await?;
    repo.insert_room("PT_ROOM", 1).await?;
    repo.insert_room("STUDIO", 10).await?;

    info!("Seeded demo directory data");
    Ok(())
}
