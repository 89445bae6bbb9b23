//! This project is split in 2 main modules:
//!
//! - [gateway] (PayWeb3 protocol implementation)
//! - [pay] (payer-facing HTTP surface)
#![doc = include_str!("../README.md")]

use std::net::{Ipv4Addr, SocketAddrV4};

use axum::Router;
use tracing_subscriber::EnvFilter;

mod config;
/// PayWeb3 gateway integration
///
/// This module defines the types and methods to build, checksum and dispatch
/// initiate requests to PayGate, and the checksum codec shared with the
/// callback endpoints.
mod gateway;
/// Payer-facing HTTP surface: landing page, payment intake, the gateway
/// redirect step and the `return`/`notify` callback endpoints.
mod pay;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::warn!("Failed to environment variables from .env: {e}"),
    };
    let config = config::Config::from_env().expect("PAYGATE_ID and PAYGATE_KEY must be configured");
    let port = config.port;
    let state = state::AppState::new(config);

    let app = Router::new()
        .merge(pay::api::router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))
        .await
        .unwrap();

    tracing::info!("Serving on port {port}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .unwrap();
}
