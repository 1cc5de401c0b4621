//! Author endpoints.
//!
//! Every handler answers 200 with the success envelope or 500 with the
//! failure envelope, including when the body cannot be read as JSON.
//! Errors are logged here and never sent to the client.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};

use super::response::{Placeholder, failure, success};
use crate::infrastructure::AppState;
use crate::services::{CreateAuthorRequest, UpdateAuthorRequest};

#[utoipa::path(
    get,
    path = "/api/authors",
    responses(
        (status = 200, description = "All authors with their news", body = [crate::domain::Author]),
        (status = 500, description = "Persistence failure, data is []")
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> Response {
    match state.author_service.list().await {
        Ok(authors) => success(authors),
        Err(e) => {
            tracing::error!("Failed to list authors: {}", e);
            failure(Placeholder::List)
        }
    }
}

/// A missing author still answers 200, with `data: null`.
#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    params(("id" = String, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author, or null when absent", body = crate::domain::Author),
        (status = 500, description = "Persistence failure, data is {}")
    )
)]
pub async fn get_author(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.author_service.get_by_id(&id).await {
        Ok(author) => success(author),
        Err(e) => {
            tracing::error!("Failed to fetch author with id {}: {}", id, e);
            failure(Placeholder::Record)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 200, description = "The created author", body = crate::domain::Author),
        (status = 500, description = "Persistence failure, data is {}")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    payload: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to create author, unreadable body: {}", e);
            return failure(Placeholder::Record);
        }
    };

    match state.author_service.create(payload).await {
        Ok(author) => success(author),
        Err(e) => {
            tracing::error!("Failed to create author: {}", e);
            failure(Placeholder::Record)
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/authors/{id}",
    params(("id" = String, Path, description = "Author id")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "The author as re-read after the update", body = crate::domain::Author),
        (status = 500, description = "Persistence failure, data is {}")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAuthorRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to update author with id {}, unreadable body: {}", id, e);
            return failure(Placeholder::Record);
        }
    };

    match state.author_service.update(&id, payload).await {
        Ok(author) => success(author),
        Err(e) => {
            tracing::error!("Failed to update author with id {}: {}", id, e);
            failure(Placeholder::Record)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    params(("id" = String, Path, description = "Author id")),
    responses(
        (status = 200, description = "The authors that remain", body = [crate::domain::Author]),
        (status = 500, description = "Persistence failure, data is []")
    )
)]
pub async fn delete_author(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.author_service.delete(&id).await {
        Ok(authors) => success(authors),
        Err(e) => {
            tracing::error!("Failed to delete author with id {}: {}", id, e);
            failure(Placeholder::List)
        }
    }
}
