//! # Slotbook Web Frontend
//!
//! Server-rendered web frontend for the clinic's appointment system. It
//! exposes a landing page and two portals:
//!
//! - **Staff** (`/staff`): create slots for a date and hour, list the
//!   visible month, delete any slot.
//! - **Patient** (`/patient`): pick a date, hour, and identity number and
//!   book an open slot.
//!
//! All appointment data lives behind the external GraphQL API reached
//! through [`slotbook_gql::SlotRepository`]; this crate holds no state of
//! its own beyond the page being rendered. Every check it performs against
//! fetched data is best-effort — the external API is the authority on slot
//! uniqueness and booking.
//!
//! ## Architecture
//!
//! - **Routes**: URL structure per portal
//! - **Handlers**: fetch month, validate, mutate, awaited re-fetch, render
//! - **Views**: shared HTML layout and page renderers
//! - **Middleware**: maps domain errors to HTTP responses
//! - **Config**: environment configuration

/// Configuration module for server settings
pub mod config;
/// Request handlers that implement the two portals
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions
pub mod routes;
/// HTML rendering
pub mod views;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use slotbook_gql::{GraphQlClient, SlotRepository};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state available to all request handlers.
pub struct ApiState {
    /// Data access to the external appointment API
    pub slots: Arc<dyn SlotRepository>,
}

/// Builds the full application router over the given state.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::home::routes())
        .merge(routes::health::routes())
        .merge(routes::staff::routes())
        .merge(routes::patient::routes())
        .with_state(state)
}

/// Starts the web server: initializes logging, wires the routes over the
/// GraphQL client, and serves until shutdown.
pub async fn start_server(config: config::WebConfig, client: GraphQlClient) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with the data-access seam
    let state = Arc::new(ApiState {
        slots: Arc::new(client),
    });

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect::<Vec<_>>();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .allow_origin(tower_http::cors::AllowOrigin::list(origins));
        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
