use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level failures. Submit failures answer an empty 500, listing failures a plain-text 500.
#[derive(Debug)]
pub enum AppError {
    Decode(String),
    Save(StoreError),
    List(StoreError),
    Render(askama::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Decode(msg) => write!(f, "Failed to decode response: {msg}"),
            AppError::Save(err) => write!(f, "Failed to save response: {err}"),
            AppError::List(err) => write!(f, "Failed to list responses: {err}"),
            AppError::Render(err) => write!(f, "Failed to render responses: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Decode(msg) => {
                tracing::error!("Failed to decode response: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Save(err) => {
                tracing::error!("Failed to save response: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::List(err) => {
                tracing::error!("Failed to list responses: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "An error occurred").into_response()
            }
            AppError::Render(err) => {
                tracing::error!("Failed to render responses: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "An error occurred").into_response()
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err)
    }
}

/// Failures raised by a submission store.
#[derive(Debug)]
pub enum StoreError {
    Connect(sqlx::Error),
    Migrate(sqlx::migrate::MigrateError),
    Write(sqlx::Error),
    Read(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Connect(err) => write!(f, "connect failed: {err}"),
            StoreError::Migrate(err) => write!(f, "migration failed: {err}"),
            StoreError::Write(err) => write!(f, "write failed: {err}"),
            StoreError::Read(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Terminal failures of the startup sequence. The process never serves after one of these.
#[derive(Debug)]
pub enum StartupError {
    Config(String),
    Store(StoreError),
    Bind(std::io::Error),
    Serve(std::io::Error),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            StartupError::Store(err) => write!(f, "Failed to connect to datastore: {err}"),
            StartupError::Bind(err) => write!(f, "Failed to bind listener: {err}"),
            StartupError::Serve(err) => write!(f, "Server error: {err}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<StoreError> for StartupError {
    fn from(err: StoreError) -> Self {
        StartupError::Store(err)
    }
}
