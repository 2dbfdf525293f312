// handlers/protected/movies/record.rs - GET/PUT/DELETE /movies/:title

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::database::models::MovieChanges;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

const NOT_FOUND: &str = "Movie not found.";

/// GET /movies/:title - Fetch one movie by title
pub async fn movie_get(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let movie = state
        .movies
        .find_by_title(&title)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    Ok(Json(json!({ "success": true, "movie": movie })))
}

/// PUT /movies/:title - Replace the supplied fields of a movie
///
/// Fields left out of the body keep their stored values.
pub async fn movie_put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(title): Path<String>,
    payload: Result<Json<MovieChanges>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(changes) = payload?;

    let movie = state
        .movies
        .update_by_title(&title, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    tracing::info!("'{}' updated movie '{}' ({})", user.username, title, movie.id);

    Ok(Json(json!({
        "success": true,
        "message": "Movie updated successfully.",
        "movie": movie
    })))
}

/// DELETE /movies/:title - Remove a movie
pub async fn movie_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(title): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !state.movies.delete_by_title(&title).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("'{}' deleted movie '{}'", user.username, title);

    Ok(Json(json!({ "success": true, "message": "Movie deleted successfully." })))
}
