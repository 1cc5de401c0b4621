//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// News item attached to an author when the author is read back.
/// Owned by another service; never written from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewsItem {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub author_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Author data for API responses.
///
/// There is deliberately no password field: the stored hash cannot leak
/// through any value of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub independent: bool,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub news: Vec<NewsItem>,
}

/// Input for inserting an author. Absent fields are left to the store's
/// column constraints.
#[derive(Debug, Clone, Default)]
pub struct NewAuthor {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub independent: Option<bool>,
    pub email: Option<String>,
    pub password_hash: String,
}

/// The mutable subset of an author. `None` leaves the column untouched;
/// `Some(None)` writes NULL and lets the column constraints decide.
#[derive(Debug, Clone, Default)]
pub struct AuthorChanges {
    pub name: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub independent: Option<Option<bool>>,
}

/// Repository trait for Author entity
///
/// Every read eager-loads the author's news and excludes the password hash.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// Find an author by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, input: NewAuthor) -> Result<Author, DomainError>;

    /// Update the authors matching `id`, returning the number of rows touched
    async fn update_where(&self, id: i32, changes: AuthorChanges) -> Result<u64, DomainError>;

    /// Delete the authors matching `id`, returning the number of rows removed
    async fn delete_where(&self, id: i32) -> Result<u64, DomainError>;
}
