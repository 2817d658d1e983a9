//! Gateway service: router construction and the HTTP server lifecycle.

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, ApiResult, GatewayError};
use crate::domain::types::{CalculationResponse, StatusResponse};
use crate::middleware::create_cors_layer;
use crate::{physics, validation};
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::sync::watch;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Field gateway service.
///
/// Stateless request/response cycle: nothing persists across requests
/// and the handlers are pure functions of their inputs.
pub struct FieldGatewayService {
    config: GatewayConfig,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl FieldGatewayService {
    /// Create a new gateway service with a validated configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Serve HTTP until [`Self::shutdown`] is triggered.
    pub async fn start(&self) -> Result<(), GatewayError> {
        let addr = self.config.http_addr();
        let router = build_router(&self.config);

        info!(addr = %addr, "Starting HTTP server");
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(e.to_string()))?;

        let mut shutdown_rx = self.shutdown_rx.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
                info!("Received shutdown signal");
            })
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Trigger graceful shutdown.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Shutdown sender for driving [`Self::shutdown`] from another task.
    pub fn shutdown_sender(&self) -> watch::Sender<bool> {
        self.shutdown_tx.clone()
    }
}

/// Build the HTTP router: status and calculate routes, structured
/// 404/405 fallbacks, panic recovery, a request body size cap,
/// tracing, and CORS.
///
/// The layers are applied one `Router::layer` call at a time so each
/// middleware sees axum's re-boxed `Body`; later calls wrap earlier
/// ones, so CORS is outermost.
pub fn build_router(config: &GatewayConfig) -> Router {
    Router::new()
        .route("/", get(status).fallback(method_not_allowed))
        .route("/calculate", post(calculate).fallback(method_not_allowed))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(RequestBodyLimitLayer::new(config.limits.max_request_size))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(&config.cors))
}

/// `GET /` — fixed informational payload for liveness checks.
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::current())
}

/// `POST /calculate` — validator, then calculator, then response
/// assembly. Any validation failure short-circuits with a 400.
async fn calculate(body: String) -> ApiResult<Json<CalculationResponse>> {
    let request = validation::parse_body(&body).map_err(|e| {
        warn!(error = %e, "Rejected calculation request");
        e
    })?;

    let results = physics::evaluate(&request).map_err(|e| {
        warn!(error = %e, "Calculation failed after validation");
        ApiError::calculation(&e)
    })?;

    Ok(Json(CalculationResponse { results }))
}

/// Map an escaped panic to the 500 wire body instead of the
/// framework's empty default response.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected failure".to_string()
    };

    error!(detail = %detail, "Handler panicked");
    ApiError::internal(detail).into_response()
}

/// Fallback for unmatched routes.
async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Fallback for disallowed methods on a known route.
async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
