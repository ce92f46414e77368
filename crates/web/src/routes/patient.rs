use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/patient", get(handlers::patient::patient_page))
        .route("/patient/book", post(handlers::patient::book_slot))
}
