// handlers/public/system.rs - Service root and health probe

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service information and endpoint map
pub async fn root_get() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "Movie Catalog API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "signup": "POST /signup (public)",
                "signin": "POST /signin (public - token acquisition)",
                "health": "GET /health (public)",
                "movies": "GET|POST /movies (protected)",
                "movie": "GET|PUT|DELETE /movies/:title (protected)",
            }
        }
    }))
}

/// GET /health - 200 while the catalog store answers, 503 otherwise
pub async fn health_get(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match state.movies.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "msg": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
