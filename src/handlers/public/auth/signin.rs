// handlers/public/auth/signin.rs - POST /signin handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::TOKEN_SCHEME;
use crate::error::ApiError;
use crate::state::AppState;

use super::non_empty;

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /signin - Authenticate and receive a session token
///
/// Input: `{ "username": "string", "password": "string" }`
///
/// Output: `{ "success": true, "token": "JWT eyJhbGciOi..." }`. The token is
/// valid for one hour and goes back verbatim in the `Authorization` header.
pub async fn signin_post(
    State(state): State<AppState>,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload?;

    let user = match non_empty(payload.username) {
        Some(username) => state.credentials.find_by_username(&username).await?,
        None => None,
    };

    let Some(user) = user else {
        tracing::warn!("Signin rejected: unknown user");
        return Err(ApiError::unauthorized("Authentication failed. User not found."));
    };

    let candidate = payload.password.unwrap_or_default();
    if !state.credentials.verify_password(&user, &candidate).await? {
        tracing::warn!("Signin rejected: wrong password for '{}'", user.username);
        return Err(ApiError::unauthorized("Authentication failed. Incorrect password."));
    }

    let token = state.tokens.issue(user.id, &user.username)?;
    tracing::info!("Issued token for '{}'", user.username);

    Ok(Json(json!({
        "success": true,
        "token": format!("{} {}", TOKEN_SCHEME, token)
    })))
}
