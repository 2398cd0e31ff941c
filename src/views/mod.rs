pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new().route("/responses", get(responses::list_page))
}
