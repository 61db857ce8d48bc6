//! Account Gateway Library
//!
//! HTTP REST API over the account service: registration, availability
//! checks, the login lookup and per-view welcome notifications.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use account_service_lib::infra::Database;
use account_service_lib::repository::{AccountStore, InMemoryAccountStore};
use account_service_lib::service::AccountManager;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application state for the configured store.
pub async fn build_state(
    config: &GatewayConfig,
    in_memory: bool,
) -> Result<AppState, Box<dyn std::error::Error>> {
    if in_memory {
        info!("Using in-memory account store");
        return Ok(
            AppState::with_repository(Arc::new(InMemoryAccountStore::new()))
                .with_view_capacity(config.view_capacity),
        );
    }

    let database = Database::connect(&config.database).await?;
    let repo = Arc::new(AccountStore::new(database.get_connection()));

    Ok(
        AppState::new(Arc::new(AccountManager::new(repo)), Some(database))
            .with_view_capacity(config.view_capacity),
    )
}

/// Run the HTTP server with the given configuration.
pub async fn run(config: GatewayConfig, in_memory: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config, in_memory).await?;

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.service.addr().parse()?;
    info!(service = %config.service.service_name, "Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
