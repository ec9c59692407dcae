use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{handlers, SharedDirectory};

pub fn create_router(directory: SharedDirectory) -> Router {
    Router::new()
        .route("/employees/{pen}", get(handlers::get_employee))
        .layer(TraceLayer::new_for_http())
        .with_state(directory)
}
