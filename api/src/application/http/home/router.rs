use axum::{Router, routing::get};

use super::handlers::get_index::get_index;
use crate::application::http::server::app_state::AppState;

pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(get_index))
}
