//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating repository instances based on
//! runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{ClubRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
    /// External SQL database. Not wired in this build; selecting it yields a
    /// configuration error, matching how the scheduling core stays
    /// storage-agnostic.
    Postgres,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "postgres" | "pg" => Ok(Self::Postgres),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable,
    /// defaulting to Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }
        Self::Local
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ClubRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If creation fails or the type is not available
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn ClubRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
            RepositoryType::Postgres => Err(RepositoryError::configuration(
                "Postgres repository backend is not enabled in this build",
            )),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn ClubRepository> {
        Arc::new(LocalRepository::new())
    }
}
