//! HTTP API surface.
//!
//! Four report endpoints plus health and metrics:
//!
//! * `POST /api/email/status` - send a status report email
//! * `POST /api/email/completion` - send a completion report email
//! * `GET /api/email/preview/status` - render the status template with
//!   sample data, no email sent
//! * `GET /api/email/preview/completion` - render the completion template
//!   with sample data, no email sent
//! * `GET /health` - liveness probe
//! * `GET /metrics` - Prometheus exposition
//!
//! Send responses are JSON `{"success": bool, "message": string}`.
//! Validation failures map to 400, everything else that aborts a send maps
//! to 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::SendError;
use crate::report::{TestCompletionReport, TestStatusReport};
use crate::service::ReportMailer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<ReportMailer>,
    pub metrics: PrometheusHandle,
}

/// JSON body returned by the send endpoints.
#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub message: String,
}

/// Build the application router with tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/email/status", post(send_status))
        .route("/api/email/completion", post(send_completion))
        .route("/api/email/preview/status", get(preview_status))
        .route("/api/email/preview/completion", get(preview_completion))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn send_status(
    State(state): State<AppState>,
    Json(report): Json<TestStatusReport>,
) -> Response {
    match state.mailer.send_status_email(&report).await {
        Ok(()) => success("Test status email sent successfully"),
        Err(e) => failure(e),
    }
}

async fn send_completion(
    State(state): State<AppState>,
    Json(report): Json<TestCompletionReport>,
) -> Response {
    match state.mailer.send_completion_email(report).await {
        Ok(()) => success("Test completion email sent successfully"),
        Err(e) => failure(e),
    }
}

async fn preview_status(State(state): State<AppState>) -> Response {
    match state.mailer.preview_status_email() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "status preview failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn preview_completion(State(state): State<AppState>) -> Response {
    match state.mailer.preview_completion_email() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "completion preview failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

fn success(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(SendResponse {
            success: true,
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn failure(error: SendError) -> Response {
    let status = match error {
        SendError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(SendResponse {
            success: false,
            message: format!("Failed to send email: {}", error),
        }),
    )
        .into_response()
}
