pub mod form;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn form_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(form::form_page))
        .route("/submit", post(form::submit))
}
