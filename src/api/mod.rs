pub mod author;
pub mod response;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Authors
        .route(
            "/authors",
            get(author::list_authors).post(author::create_author),
        )
        .route(
            "/authors/:id",
            get(author::get_author)
                .put(author::update_author)
                .delete(author::delete_author),
        )
        .with_state(state)
}
