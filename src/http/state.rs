//! Application state for the HTTP server.

use crate::db::repository::ClubRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn ClubRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn ClubRepository>) -> Self {
        Self { repository }
    }
}
