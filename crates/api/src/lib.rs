//! # Slotbook API
//!
//! HTTP surface of the interview scheduler. Recruiters publish time slots,
//! create interviews that offer a subset of them, and candidates book one.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into `BookingCoordinator` calls
//! - **Middleware**: Error to HTTP status mapping
//! - **Config**: Environment driven settings
//!
//! All state changes go through [`BookingCoordinator`]; read-only listings go
//! straight to the [`SchedulingStore`].

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use slotbook_core::{booking::BookingCoordinator, store::SchedulingStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Backend used for read-only listings
    pub store: Arc<dyn SchedulingStore>,
    /// Entry point for every state change
    pub coordinator: BookingCoordinator,
}

impl ApiState {
    pub fn new(store: Arc<dyn SchedulingStore>) -> Self {
        let coordinator = BookingCoordinator::new(store.clone());
        Self { store, coordinator }
    }
}

/// Builds the application router with every route and layer applied.
///
/// # Errors
///
/// Fails if a configured CORS origin is not a valid header value.
pub fn build_router(config: &config::ApiConfig, state: Arc<ApiState>) -> Result<Router> {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Recruiter and candidate directory
        .merge(routes::directory::routes())
        // Slot publication
        .merge(routes::slots::routes())
        // Interview lifecycle and booking
        .merge(routes::interviews::routes())
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing, then a per-request timeout
    Ok(app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    ))
}

/// Installs the global tracing subscriber using `config.log_level` as filter.
pub fn init_tracing(config: &config::ApiConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .wrap_err_with(|| format!("Invalid LOG_LEVEL value: {}", config.log_level))?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Starts the API server on top of an already constructed store
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use slotbook_api::{config::ApiConfig, start_server};
/// use slotbook_db::InMemoryStore;
///
/// let config = ApiConfig::from_env()?;
/// start_server(config, Arc::new(InMemoryStore::seeded())).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn SchedulingStore>) -> Result<()> {
    let state = Arc::new(ApiState::new(store));
    let app = build_router(&config, state)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
