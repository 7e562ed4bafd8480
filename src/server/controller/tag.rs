use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, post::TagDto},
    server::{data::tag::TagRepository, error::AppError, state::AppState},
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Get all tags ordered by name.
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagRepository::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(tags.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}
