use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use flightlog_api::config::ServerConfig;
use flightlog_api::routes;
use flightlog_api::state::AppState;
use flightlog_core::types::Timestamp;
use flightlog_events::NewTrackNotifier;

/// A small but complete IGC file served by the local fixture server.
pub const SAMPLE_IGC: &str = "AXXXABC FLIGHT:1\n\
    HFDTE281118\n\
    HFPLTPILOTINCHARGE:John Doe\n\
    HFGTYGLIDERTYPE:ASK-21\n\
    HFGIDGLIDERID:LN-GAB\n\
    B1101355206343N00006198WA0058700558\n\
    B1102355306343N00006198WA0058700558\n";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        ticker_page_size: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        started_at: Instant::now(),
        http: reqwest::Client::new(),
        notifier: Arc::new(NewTrackNotifier::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Run a GET request against the app.
pub async fn get_req(app: &Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None).await
}

/// Run a POST request with a JSON body against the app.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(body)).await
}

/// Run a DELETE request against the app.
pub async fn delete_req(app: &Router, uri: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None).await
}

/// Run an arbitrary request against the app.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start a local HTTP server that serves [`SAMPLE_IGC`] on every path,
/// returning its base URL. Ingestion tests point `POST /track` at it.
pub async fn serve_igc_fixture() -> String {
    let fixture = Router::new().route("/{name}", get(|| async { SAMPLE_IGC }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, fixture).await.unwrap();
    });
    format!("http://{addr}")
}

/// Insert a track row directly with an explicit `time_recorded`, bypassing
/// the ingestion path. Returns the new id.
pub async fn insert_track_at(pool: &PgPool, url: &str, time_recorded: Timestamp) -> uuid::Uuid {
    sqlx::query_scalar(
        "INSERT INTO tracks (url, time_recorded, h_date, pilot, glider, glider_id, track_length) \
         VALUES ($1, $2, '2018-11-28', 'John Doe', 'ASK-21', 'LN-GAB', 42.0) \
         RETURNING id",
    )
    .bind(url)
    .bind(time_recorded)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Expect the standard `{error, code}` JSON error envelope.
pub async fn assert_error_envelope(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
}
