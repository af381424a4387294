//! HTTP proxy in front of the quote provider.
//!
//! # Endpoints
//!
//! - `GET /api/stocks` - JSON array of quotes, or `500` if any symbol failed
//! - `GET /api/stocks/report` - quotes plus per-symbol failures, always `200`
//! - `GET /healthz` - liveness probe

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::service::QuoteService;
use crate::{Result, TickerboardError};

/// Message returned to clients when the batch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch stock data";

/// Body of a failed `/api/stocks` response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Builds the proxy router around a quote service.
pub fn router(service: Arc<QuoteService>) -> Router {
    Router::new()
        .route("/api/stocks", get(stocks_handler))
        .route("/api/stocks/report", get(report_handler))
        .route("/healthz", get(liveness_handler))
        .with_state(service)
}

/// Binds `addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns [`TickerboardError::Server`] if binding fails or the server
/// stops with an error.
pub async fn serve(service: Arc<QuoteService>, addr: SocketAddr) -> Result<()> {
    let symbols = service.watchlist().len();
    let app = router(service);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| TickerboardError::Server(format!("failed to bind {addr}: {e}")))?;

    info!(%addr, symbols, "quote proxy listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TickerboardError::Server(e.to_string()))?;

    info!("quote proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}

async fn stocks_handler(State(service): State<Arc<QuoteService>>) -> impl IntoResponse {
    match service.fetch_all().await {
        Ok(quotes) => (StatusCode::OK, Json(quotes)).into_response(),
        Err(e) => {
            error!(error = %e, "stock batch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: FETCH_FAILED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn report_handler(State(service): State<Arc<QuoteService>>) -> impl IntoResponse {
    (StatusCode::OK, Json(service.fetch_report().await))
}

async fn liveness_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
