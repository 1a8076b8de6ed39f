//! REST gateway library.
//!
//! Translates HTTP/JSON requests into calls against the user gRPC service
//! and renders the shared error taxonomy as HTTP statuses.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::clients::UserClient;
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::service::UserProxy;
use crate::state::AppState;

/// Run the HTTP server with configuration from the environment.
pub async fn run(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env();
    run_with_config(host, port, config).await
}

async fn run_with_config(
    host: &str,
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Open the single outbound client connection at startup
    let user_client = UserClient::connect(&config.user_service_url).await?;
    let user_service = Arc::new(UserProxy::new(Arc::new(user_client)));

    let state = AppState::new(user_service);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
