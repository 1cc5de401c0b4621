//! Author Service - Pure business logic without HTTP layer
//!
//! The five author operations, written against an injected
//! `AuthorRepository` so handlers and tests can swap the store.

use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{Author, AuthorChanges, AuthorRepository, DomainError, NewAuthor};
use crate::infrastructure::auth::hash_password;

/// Body accepted by create. Nothing is checked here; missing fields
/// reach the store as-is.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub independent: Option<bool>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body accepted by update. `email` and `password` are not part of it and
/// are dropped by serde if a client sends them.
///
/// An absent key deserializes to `None`, an explicit `null` to `Some(None)`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAuthorRequest {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<bool>)]
    pub independent: Option<Option<bool>>,
}

// Only runs when the key is present, so `null` becomes `Some(None)`
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Clone)]
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    /// All authors with their news
    pub async fn list(&self) -> Result<Vec<Author>, DomainError> {
        self.repo.find_all().await
    }

    /// A missing author is `Ok(None)`, not an error
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Option<Author>, DomainError> {
        let id = parse_id(raw_id)?;
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, req: CreateAuthorRequest) -> Result<Author, DomainError> {
        let password = req
            .password
            .ok_or_else(|| DomainError::Validation("password is required".to_string()))?;
        let password_hash = hash_password(&password).map_err(DomainError::Internal)?;

        let author = self
            .repo
            .create(NewAuthor {
                name: req.name,
                bio: req.bio,
                independent: req.independent,
                email: req.email,
                password_hash,
            })
            .await?;

        tracing::debug!("Created author {}", author.id);
        Ok(author)
    }

    /// Writes the mutable fields, then reads the author back.
    ///
    /// The write and the read are separate statements: a failed read can
    /// follow a write that has already been persisted.
    pub async fn update(
        &self,
        raw_id: &str,
        req: UpdateAuthorRequest,
    ) -> Result<Option<Author>, DomainError> {
        let id = parse_id(raw_id)?;

        let rows = self
            .repo
            .update_where(
                id,
                AuthorChanges {
                    name: req.name,
                    bio: req.bio,
                    independent: req.independent,
                },
            )
            .await?;
        tracing::debug!("Updated {} author row(s) for id {}", rows, id);

        self.repo.find_by_id(id).await
    }

    /// Removes the author and returns everyone that is left.
    pub async fn delete(&self, raw_id: &str) -> Result<Vec<Author>, DomainError> {
        let id = parse_id(raw_id)?;

        let rows = self.repo.delete_where(id).await?;
        tracing::debug!("Deleted {} author row(s) for id {}", rows, id);

        self.repo.find_all().await
    }
}

fn parse_id(raw: &str) -> Result<i32, DomainError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| DomainError::Validation(format!("invalid author id '{}'", raw)))
}
