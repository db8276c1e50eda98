pub mod api;
pub mod config;
pub mod telemetry;

use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::Router;
use cityinfo_core::CityService;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers
pub type AppState = Arc<CityService>;

/// Ping is polled by uptime checks and kept out of the request log
const PING_PATH: &str = "/api/test/ping";

/// Build the full application: API routes, Swagger UI and request tracing.
pub fn app(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .nest("/cities", api::cities::router())
        .nest("/api/test", api::testing::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    if matched_path == PING_PATH {
                        tracing::trace_span!("city_request")
                    } else {
                        tracing::info_span!(
                            "city_request",
                            method = %request.method(),
                            route = %matched_path,
                            uri = %request.uri().path(),
                        )
                    }
                })
                .on_response(
                    |response: &Response<_>, latency: Duration, span: &Span| {
                        if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
                            return;
                        }
                        let status = response.status().as_u16();
                        let latency_ms = latency.as_millis() as u64;
                        match status {
                            500.. => {
                                tracing::error!(status, latency_ms, "city request failed")
                            }
                            400..=499 => tracing::info!(status, latency_ms, "city request rejected"),
                            _ => tracing::info!(status, latency_ms, "city request served"),
                        }
                    },
                )
                // 5xx already logged by on_response
                .on_failure(()),
        )
}
