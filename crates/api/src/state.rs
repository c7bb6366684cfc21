use std::sync::Arc;

use impact_core::catalog::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, `None` when `DATABASE_URL` is unset.
    ///
    /// The server runs without it; only the endpoints that touch storage
    /// report the missing handle.
    pub pool: Option<impact_db::DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Static content catalog, seeded once at startup and never mutated.
    pub catalog: Arc<Catalog>,
}
