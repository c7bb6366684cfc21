use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Root health check payload.
#[derive(Serialize)]
pub struct RootResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Human-readable service name.
    pub service: &'static str,
}

/// Database wiring check payload.
#[derive(Serialize)]
pub struct DbCheckResponse {
    pub status: &'static str,
    pub db: bool,
}

/// GET / -- fixed reachability payload. Cannot fail.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        service: "Impact Avenue API",
    })
}

/// GET /test -- reports whether a database handle was constructed.
///
/// This is a wiring check only: it does not issue a query, so it says
/// nothing about whether the store is reachable over the network.
async fn test_db(State(state): State<AppState>) -> AppResult<Json<DbCheckResponse>> {
    if state.pool.is_none() {
        return Err(AppError::NotConfigured);
    }

    Ok(Json(DbCheckResponse {
        status: "ok",
        db: true,
    }))
}

/// Health routes mounted at the router root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_db))
}
