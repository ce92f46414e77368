use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/", get(handlers::home::home))
}
