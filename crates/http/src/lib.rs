//! HTTP server facade for the bookstore service with Axum, error handling,
//! and OpenAPI support.

use anyhow::Context;
use axum::{routing::get, Router};

use bookstore_kernel::settings::Settings;
use bookstore_kernel::ModuleRegistry;

pub mod error;
pub mod router;

use router::RouterBuilder;

/// Start the HTTP server with the given module registry
pub async fn start_server(registry: &ModuleRegistry, settings: &Settings) -> anyhow::Result<()> {
    let app = build_router(registry, settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")
}

/// Build the main HTTP router: global middlewares, health check, one mount
/// per module under `/api/v1/{module_name}`, and the merged OpenAPI docs.
/// Public so tests can drive the full stack without binding a socket.
pub fn build_router(registry: &ModuleRegistry, settings: &Settings) -> Router {
    let mut builder = RouterBuilder::new()
        .with_tracing()
        .with_cors()
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms)
        .route("/healthz", get(health_check));

    for module in registry.modules() {
        tracing::info!(module = module.name(), "mounting module routes");
        builder = builder.mount_module(module.name(), module.routes());
    }

    builder.with_openapi(registry).build()
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
