use std::convert::Infallible;
use std::path::Path;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

pub const FORM_PAGE: &str = "form.html";
pub const CONFIRMATION_PAGE: &str = "submit.html";

/// Stream one named file from the public directory. A missing file yields 404.
pub async fn serve_file(public_dir: &Path, name: &str) -> Response {
    let request = Request::new(Body::empty());
    let result: Result<_, Infallible> = ServeFile::new(public_dir.join(name))
        .oneshot(request)
        .await;
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Fallback service resolving any other path against the public directory.
pub fn public_files(public_dir: &Path) -> ServeDir {
    ServeDir::new(public_dir)
}
