//! Program catalog listing.

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;

use impact_core::catalog::Program;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProgramsQuery {
    /// Optional category filter, matched case-insensitively.
    pub category: Option<String>,
}

/// GET /programs -- list the static program catalog, optionally filtered
/// by category. An unknown category yields an empty array.
async fn list_programs(
    State(state): State<AppState>,
    Query(query): Query<ProgramsQuery>,
) -> Json<Vec<Program>> {
    // An empty `?category=` is treated the same as no filter.
    let programs = match query.category.as_deref() {
        Some(category) if !category.is_empty() => state
            .catalog
            .programs_in_category(category)
            .into_iter()
            .cloned()
            .collect(),
        _ => state.catalog.programs.clone(),
    };

    Json(programs)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/programs", get(list_programs))
}
