//! # Salonbook API
//!
//! The axum web server for the salon booking backend: appointments, blocked
//! slots, users, the service catalogue, staff, payments and confirmation
//! email.
//!
//! ## Architecture
//!
//! - **Routes**: URL structure, one module per resource
//! - **Handlers**: request processing; booking rules are delegated to
//!   [`BookingService`]
//! - **Middleware**: the admin gate extractor and error mapping
//! - **Config**: environment configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Authentication and error handling
pub mod middleware;
/// Route definitions
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use salonbook_core::{booking::BookingService, store::UserStore};
use salonbook_db::PgStore;
use salonbook_mailer::{config::SalonProfile, Mailer};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL pool for the catalogue, staff and payment repositories
    pub db_pool: PgPool,
    pub bookings: BookingService,
    pub users: Arc<dyn UserStore>,
    pub mailer: Arc<dyn Mailer>,
    pub salon: SalonProfile,
}

impl ApiState {
    /// State backed entirely by PostgreSQL.
    pub fn postgres(db_pool: PgPool, mailer: Arc<dyn Mailer>, salon: SalonProfile, serialize_slot_writes: bool) -> Self {
        let store = Arc::new(PgStore::new(db_pool.clone()));

        let bookings = BookingService::new(store.clone(), store.clone());
        let bookings = if serialize_slot_writes {
            bookings.with_slot_locks()
        } else {
            bookings
        };

        Self {
            db_pool,
            bookings,
            users: store,
            mailer,
            salon,
        }
    }
}

/// Installs the global fmt subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// All routes with shared state attached and request tracing enabled.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::appointment::routes())
        .merge(routes::availability::routes())
        .merge(routes::user::routes())
        .merge(routes::service::routes())
        .merge(routes::staff::routes())
        .merge(routes::email::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Binds the listener and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    if state.bookings.serializes_slot_writes() {
        info!("Slot writes are serialised per slot");
    }

    let app = build_router(state);

    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
