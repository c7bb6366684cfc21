//! Testimonial catalog listing.

use axum::extract::State;
use axum::{routing::get, Json, Router};

use impact_core::catalog::Testimonial;

use crate::state::AppState;

/// GET /testimonials -- list the static testimonial catalog in seed order.
async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.catalog.testimonials.clone())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/testimonials", get(list_testimonials))
}
