use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::author::list_authors,
        api::author::get_author,
        api::author::create_author,
        api::author::update_author,
        api::author::delete_author,
    ),
    components(
        schemas(
            crate::domain::Author,
            crate::domain::NewsItem,
            crate::services::CreateAuthorRequest,
            crate::services::UpdateAuthorRequest,
        )
    ),
    tags(
        (name = "author-records", description = "Author Records API")
    )
)]
pub struct ApiDoc;
