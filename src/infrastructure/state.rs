//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::AuthorRepository;
use crate::infrastructure::SeaOrmAuthorRepository;
use crate::services::AuthorService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Author service over the configured repository
    pub author_service: AuthorService,
}

impl AppState {
    /// Create a new AppState backed by the SeaORM repositories
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_author_repo(Arc::new(SeaOrmAuthorRepository::new(db)))
    }

    /// Create an AppState over any author repository implementation
    pub fn with_author_repo(author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self {
            author_service: AuthorService::new(author_repo),
        }
    }
}
