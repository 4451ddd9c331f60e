mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_empty_without_tracks(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get_req(&app, "/track").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_empty_url(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_json(&app, "/track", json!({ "url": "   " })).await;
    common::assert_error_envelope(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_unreachable_url(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Nothing listens on the discard port, so the fetch fails fast.
    let response = common::post_json(
        &app,
        "/track",
        json!({ "url": "http://127.0.0.1:9/flight.igc" }),
    )
    .await;
    common::assert_error_envelope(response, StatusCode::BAD_REQUEST, "UPSTREAM_PARSE_ERROR").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_ingests_and_lists_track(pool: PgPool) {
    let app = common::build_test_app(pool);
    let base = common::serve_igc_fixture().await;
    let url = format!("{base}/flight.igc");

    let response = common::post_json(&app, "/track", json!({ "url": url })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let id = common::body_json(response).await;
    assert!(id.is_string());

    let response = common::get_req(&app, "/track").await;
    assert_eq!(common::body_json(response).await, json!([id]));

    let response = common::get_req(&app, &format!("/track/{}", id.as_str().unwrap())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let info = common::body_json(response).await;
    assert_eq!(info["pilot"], "John Doe");
    assert_eq!(info["glider"], "ASK-21");
    assert_eq!(info["glider_id"], "LN-GAB");
    assert_eq!(info["h_date"], "2018-11-28");
    assert_eq!(info["track_src_url"], url);
    assert!(info["track_length"].as_f64().unwrap() > 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reposting_known_url_conflicts_with_original_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let base = common::serve_igc_fixture().await;
    let url = format!("{base}/flight.igc");

    let response = common::post_json(&app, "/track", json!({ "url": url })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let original_id = common::body_json(response).await;

    let response = common::post_json(&app, "/track", json!({ "url": url })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let conflict = common::body_json(response).await;
    assert_eq!(conflict["id"], original_id);

    // Still exactly one track in the store.
    let response = common::get_req(&app, "/track").await;
    assert_eq!(common::body_json(response).await, json!([original_id]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn field_lookup_returns_single_values(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let id = common::insert_track_at(&pool, "http://example.com/a.igc", chrono::Utc::now()).await;

    let response = common::get_req(&app, &format!("/track/{id}/pilot")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!("John Doe"));

    let response = common::get_req(&app, &format!("/track/{id}/track_length")).await;
    assert_eq!(common::body_json(response).await, json!(42.0));

    let response = common::get_req(&app, &format!("/track/{id}/track_src_url")).await;
    assert_eq!(
        common::body_json(response).await,
        json!("http://example.com/a.igc")
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let id = common::insert_track_at(&pool, "http://example.com/a.igc", chrono::Utc::now()).await;

    let response = common::get_req(&app, &format!("/track/{id}/altitude")).await;
    common::assert_error_envelope(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_and_malformed_ids_are_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get_req(
        &app,
        "/track/00000000-0000-0000-0000-000000000000",
    )
    .await;
    common::assert_error_envelope(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;

    // Not a UUID at all, so it cannot name a stored track.
    let response = common::get_req(&app, "/track/999999/pilot").await;
    common::assert_error_envelope(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unsupported_method_is_not_implemented(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::request(&app, Method::PUT, "/track", None).await;
    common::assert_error_envelope(response, StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED").await;

    let response = common::request(&app, Method::DELETE, "/track", None).await;
    common::assert_error_envelope(response, StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED").await;
}
