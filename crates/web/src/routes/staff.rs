use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/staff", get(handlers::staff::staff_page))
        .route("/staff/slots", post(handlers::staff::create_slot))
        .route("/staff/slots/remove", post(handlers::staff::remove_slot))
}
