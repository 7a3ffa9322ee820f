#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use pointcloud_api::config::{ServerConfig, ServiceRole};
use pointcloud_api::gateway::{self, GatewayState};
use pointcloud_api::routes;
use pointcloud_api::state::AppState;
use pointcloud_cache::{AnnotationCache, MemoryCache};

/// Build a test `ServerConfig` for the handler role with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        role: ServiceRole::Handler,
        host: "127.0.0.1".to_string(),
        port: 0,
        handler_url: "http://127.0.0.1:8081".to_string(),
        database_url: String::new(),
        redis_url: String::new(),
        cache_ttl_secs: 300,
        proxy_timeout_secs: 30,
        request_timeout_secs: 30,
        cors_origins: vec!["http://localhost:5173".to_string()],
    }
}

/// Build the handler-role application router with an in-memory cache.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_cache(pool, Arc::new(MemoryCache::new()))
}

/// Build the handler-role application router with the given cache, using
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app_with_cache(pool: PgPool, cache: Arc<dyn AnnotationCache>) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        cache,
        config: Arc::new(config.clone()),
    };

    with_test_middleware(
        Router::new()
            .merge(routes::health::router())
            .nest("/api/v1", routes::api_routes())
            .with_state(state),
        &config,
    )
}

/// Build the gateway-role application router pointed at the given
/// upstream URL.
pub fn build_gateway_app(handler_url: &str, proxy_timeout_secs: u64) -> Router {
    let config = ServerConfig {
        role: ServiceRole::Gateway,
        handler_url: handler_url.to_string(),
        proxy_timeout_secs,
        ..test_config()
    };

    let state = GatewayState {
        client: gateway::build_client(&config),
        config: Arc::new(config.clone()),
    };

    with_test_middleware(
        Router::new()
            .merge(gateway::health_router())
            .nest("/api/v1", gateway::api_routes())
            .with_state(state),
        &config,
    )
}

fn with_test_middleware(router: Router, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PATCH, uri, body).await
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
