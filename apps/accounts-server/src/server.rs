use std::sync::Arc;
use std::time::Duration;

use accounts::api::rest;
use accounts::domain::service::Service;
use accounts::infra::storage::{self, SeaOrmAccountsRepository};
use anyhow::{Context, Result};
use axum::Router;
use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::AppConfig;
use crate::shutdown;

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::info!("Request completed");
                },
            ),
    )
}

/// Full HTTP application: routes plus timeout and tracing middleware.
pub fn build_app(service: Arc<Service>, request_timeout: Duration) -> Router {
    let router = rest::router(service).layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        request_timeout,
    ));
    apply_trace_layer(router)
}

/// Open the store, bind and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the store cannot be opened or the address is taken.
pub async fn run(config: AppConfig) -> Result<()> {
    let db = storage::open(&config.database, &config.server.home_dir)
        .await
        .context("failed to open the accounts store")?;
    let repo = SeaOrmAccountsRepository::new(db.clone());
    let service = Arc::new(Service::new(Arc::new(repo)));

    let app = build_app(service, config.server.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "Accounts server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handling failed, shutting down");
            }
        })
        .await
        .context("server error")?;

    db.close().await.context("failed to close the accounts store")?;
    tracing::info!("Accounts server stopped");
    Ok(())
}
