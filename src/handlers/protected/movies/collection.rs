// handlers/protected/movies/collection.rs - GET/POST /movies

use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

use crate::database::models::NewMovie;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Minimum cast size accepted on create
pub const MIN_ACTORS: usize = 3;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub actors: Option<Vec<String>>,
}

impl CreateMovieRequest {
    /// Check required fields; on failure returns a message per offending field
    pub fn validate(self) -> Result<NewMovie, HashMap<String, String>> {
        let mut field_errors = HashMap::new();

        let mut required = |field: &str, value: Option<String>| {
            let value = value.filter(|v| !v.trim().is_empty());
            if value.is_none() {
                field_errors.insert(field.to_string(), "This field is required".to_string());
            }
            value
        };
        let title = required("title", self.title);
        let release_date = required("releaseDate", self.release_date);
        let genre = required("genre", self.genre);

        let actors = self.actors.unwrap_or_default();
        if actors.len() < MIN_ACTORS {
            field_errors.insert(
                "actors".to_string(),
                format!("At least {} actors are required", MIN_ACTORS),
            );
        }

        match (title, release_date, genre) {
            (Some(title), Some(release_date), Some(genre)) if field_errors.is_empty() => Ok(NewMovie {
                title,
                release_date,
                genre,
                actors,
            }),
            _ => Err(field_errors),
        }
    }
}

/// GET /movies - List the whole catalog
///
/// An empty catalog answers 404 with an empty array body.
pub async fn movies_get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, ApiError> {
    let movies = state.movies.list_all().await?;
    tracing::debug!("'{}' listed {} movies", user.username, movies.len());

    if movies.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(json!([]))).into_response());
    }
    Ok((StatusCode::OK, Json(movies)).into_response())
}

/// POST /movies - Add a movie
///
/// Input: `{ "title", "releaseDate", "genre", "actors": [at least 3] }`.
/// Invalid input is rejected before the store is touched.
pub async fn movies_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;

    let new_movie = payload.validate().map_err(|field_errors| {
        ApiError::validation_error(
            "Missing required movie fields or less than 3 actors.",
            Some(field_errors),
        )
    })?;

    let movie = state.movies.create(new_movie).await?;
    tracing::info!("'{}' added movie '{}' ({})", user.username, movie.title, movie.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Movie added successfully.",
            "movie": movie
        })),
    )
        .into_response())
}
