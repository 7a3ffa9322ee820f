//! Gateway role: transparent reverse proxy to the handler service.
//!
//! Every request on the annotation path space is forwarded verbatim to
//! the configured upstream: method, headers, path, query string, and
//! buffered body. The upstream's status, headers, and body are relayed
//! back unchanged. Upstream reachability failures are classified into
//! distinct machine codes (`service_unavailable`, `proxy_error`,
//! `configuration_error`).

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::{OriginalUri, Request, State};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE, HOST, TRANSFER_ENCODING};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};

use crate::config::{ServerConfig, SERVICE_NAME};
use crate::error::ErrorBody;
use crate::routes::health::HealthResponse;

/// Cap on buffered request bodies forwarded upstream (16 MiB).
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Shared state for the gateway role.
#[derive(Clone)]
pub struct GatewayState {
    /// Outbound HTTP client with the fixed proxy timeout applied.
    pub client: reqwest::Client,
    /// Server configuration (upstream URL).
    pub config: Arc<ServerConfig>,
}

/// Build the outbound HTTP client with the configured call timeout.
pub fn build_client(config: &ServerConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.proxy_timeout_secs))
        .build()
        .expect("Failed to build outbound HTTP client")
}

/// Build the gateway's `/api/v1` route tree.
///
/// ```text
/// ANY /annotations          proxy_to_handler
/// ANY /annotations/{*path}  proxy_to_handler
/// ```
pub fn api_routes() -> Router<GatewayState> {
    Router::new()
        .route("/annotations", any(proxy_to_handler))
        .route("/annotations/{*path}", any(proxy_to_handler))
}

/// Mount the gateway's root-level health route.
pub fn health_router() -> Router<GatewayState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health -- gateway-role health (no backing services to probe).
async fn health_check(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        role: state.config.role.as_str(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Forward an inbound request to the handler service and relay the
/// response.
///
/// `OriginalUri` is needed because nesting under `/api/v1` strips the
/// prefix from the request URI the handler sees, and the upstream serves
/// the same versioned path space.
async fn proxy_to_handler(
    State(state): State<GatewayState>,
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> Response {
    // Scheme, host, and port always come from configuration, never from
    // the client.
    let mut target = match reqwest::Url::parse(&state.config.handler_url) {
        Ok(url) => url,
        Err(err) => {
            tracing::error!(error = %err, "Invalid handler URL configuration");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration_error",
                "invalid handler URL configuration",
            );
        }
    };
    target.set_path(original_uri.path());
    target.set_query(original_uri.query());

    let method = req.method().clone();
    let headers = req.headers().clone();

    tracing::debug!(method = %method, target = %target, "Proxying request");

    let body = match to_bytes(req.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "Failed to read request body");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "failed to read request body",
            );
        }
    };

    let mut outbound = reqwest::header::HeaderMap::new();
    for (name, value) in &headers {
        // Host and Content-Length are derived from the outbound request.
        if name == &HOST || name == &CONTENT_LENGTH {
            continue;
        }
        outbound.append(name, value.clone());
    }
    if !body.is_empty() && !outbound.contains_key(CONTENT_TYPE) {
        outbound.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    let upstream = match state
        .client
        .request(method, target)
        .headers(outbound)
        .body(body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(err) => return classify_upstream_error(&err),
    };

    relay_response(upstream).await
}

/// Map an outbound transport failure to a response.
///
/// Connect failures mean the handler service is down (503); timeouts and
/// every other transport failure map to a generic bad gateway (502).
fn classify_upstream_error(err: &reqwest::Error) -> Response {
    tracing::error!(error = %err, "Failed to proxy request");

    if err.is_connect() {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "service_unavailable",
            "handler service is not available",
        )
    } else {
        error_response(
            StatusCode::BAD_GATEWAY,
            "proxy_error",
            "failed to reach handler service",
        )
    }
}

/// Relay the upstream response back to the client unchanged.
async fn relay_response(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = upstream.headers().clone();

    let body = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "Failed to read upstream response body");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "failed to read response",
            );
        }
    };

    let mut builder = Response::builder().status(status);
    if let Some(relayed) = builder.headers_mut() {
        for (name, value) in &headers {
            // Framing headers are recomputed for the buffered body.
            if name == &CONTENT_LENGTH || name == &TRANSFER_ENCODING {
                continue;
            }
            relayed.append(name, value.clone());
        }
    }

    match builder.body(Body::from(body)) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "Failed to build relayed response");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "failed to relay response",
            )
        }
    }
}

fn error_response(status: StatusCode, code: &'static str, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: code,
            message: message.to_string(),
        }),
    )
        .into_response()
}
