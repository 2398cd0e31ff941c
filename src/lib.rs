pub mod assets;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{PgStore, SubmissionStore};
use crate::error::StartupError;
use crate::state::{AppState, SharedState};

pub fn build_app(store: Arc<dyn SubmissionStore>, config: Config) -> Router {
    let public_files = assets::public_files(&config.public_dir);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { store, config });

    Router::new()
        .merge(routes::form_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .fallback_service(public_files)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connect to the datastore, then serve until a shutdown signal arrives.
///
/// The listener is only bound once the connection has succeeded, so a
/// datastore failure leaves the port untouched.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let store = PgStore::connect(&config.db).await?;
    tracing::info!("Connected to datastore");

    let store: Arc<dyn SubmissionStore> = Arc::new(store);
    let addr = SocketAddr::new(config.host, config.port);
    let app = build_app(store.clone(), config);

    let listener = TcpListener::bind(addr).await.map_err(StartupError::Bind)?;
    tracing::info!("Server running on http://{addr}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve);

    store.close().await;
    tracing::info!("Datastore connection closed");

    served
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
