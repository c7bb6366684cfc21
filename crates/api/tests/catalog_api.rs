//! Integration tests for the static catalog endpoints.
//!
//! These endpoints never touch storage, so every test runs without a
//! database pool.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /programs returns the full catalog in seed order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn programs_returns_full_catalog_in_order() {
    let app = common::build_test_app(None);
    let response = get(app, "/programs").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let programs = json.as_array().expect("Response must be a JSON array");
    assert_eq!(programs.len(), 5);

    let ids: Vec<_> = programs.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5"]);

    // Spot-check one full record.
    assert_eq!(programs[0]["category"], "Technical");
    assert_eq!(programs[0]["name"], "Networking Essentials");
    assert_eq!(programs[0]["duration"], "3 days");
}

// ---------------------------------------------------------------------------
// Test: category filter is case-insensitive
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_filter_is_case_insensitive() {
    let lower = body_json(get(common::build_test_app(None), "/programs?category=technical").await)
        .await;
    let upper = body_json(get(common::build_test_app(None), "/programs?category=Technical").await)
        .await;

    assert_eq!(lower, upper);

    let ids: Vec<_> = lower
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p1", "p2"]);
}

// ---------------------------------------------------------------------------
// Test: unknown category returns an empty array, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_category_returns_empty_array() {
    let app = common::build_test_app(None);
    let response = get(app, "/programs?category=nonexistent-category").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: empty category query is treated as no filter
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_category_returns_full_catalog() {
    let app = common::build_test_app(None);
    let response = get(app, "/programs?category=").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Test: GET /testimonials returns the three seeds in order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn testimonials_returns_three_seeds_in_order() {
    let app = common::build_test_app(None);
    let response = get(app, "/testimonials").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let testimonials = json.as_array().expect("Response must be a JSON array");
    assert_eq!(testimonials.len(), 3);

    let names: Vec<_> = testimonials
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ama Boateng", "Kwesi Mensah", "Nana Adjei"]);

    // No seed carries a photo; the field must still be present as null.
    assert!(testimonials.iter().all(|t| t["photo"].is_null()));
}

// ---------------------------------------------------------------------------
// Test: repeated calls return identical bodies (read-only catalog)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_listing_calls_are_identical() {
    let first = body_json(get(common::build_test_app(None), "/testimonials").await).await;
    let second = body_json(get(common::build_test_app(None), "/testimonials").await).await;

    assert_eq!(first, second);
}
