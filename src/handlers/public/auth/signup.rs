// handlers/public/auth/signup.rs - POST /signup handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

use super::non_empty;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /signup - Register a new account
///
/// Input: `{ "name": "string", "username": "string", "password": "string" }`
///
/// - 201 `{ success: true, msg }` once the account is stored
/// - 400 when username or password is missing
/// - 409 when the username is already taken
pub async fn signup_post(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(payload) = payload?;

    let (Some(username), Some(password)) = (non_empty(payload.username), non_empty(payload.password)) else {
        return Err(ApiError::bad_request(
            "Please include both username and password to signup.",
        ));
    };

    let user = state
        .credentials
        .create(payload.name, &username, &password)
        .await
        .map_err(|e| {
            tracing::warn!("Signup for '{}' failed: {}", username, e);
            ApiError::from(e)
        })?;

    tracing::info!("Created user '{}' ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "msg": "Successfully created new user." })),
    ))
}
