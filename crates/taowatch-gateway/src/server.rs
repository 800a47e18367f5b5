//! HTTP server implementation using axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::error::GatewayResult;
use crate::upstream::UpstreamClient;

/// Shared application state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

/// Create the axum router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/subnets", get(get_subnets))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Relay the upstream subnet payload.
///
/// Failures map to one generic 500 body; the upstream detail stays in the
/// server log so the credential and endpoint never reach the caller.
async fn get_subnets(State(state): State<AppState>) -> Response {
    match state.upstream.fetch_subnets().await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!(error = %e, "Error fetching data from upstream statistics API");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch data." })),
            )
                .into_response()
        }
    }
}

/// Run the gateway HTTP server.
pub async fn run_server(config: GatewayConfig) -> GatewayResult<()> {
    let upstream = UpstreamClient::new(&config)?;
    let state = AppState::new(upstream);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(port = config.port, "Starting gateway server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
