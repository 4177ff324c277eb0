use crate::services::{collect_diagnostics, get_metrics};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const SERVICE_NAME: &str = "horoscope-service";

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Futuristic Horoscope Backend is live" }))
}

/// Liveness: always 200 while the process runs; store state is informational.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = match state.store.as_deref() {
        None => "not_configured",
        Some(store) => match store.ping().await {
            Ok(()) => "connected",
            Err(_) => "unreachable",
        },
    };

    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "store": store
    }))
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let ready = match state.store.as_deref() {
        Some(store) => store.ping().await.is_ok(),
        None => false,
    };

    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Backend and store diagnostics. Failures are folded into the report, so
/// this handler always answers 200.
pub async fn diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    Json(collect_diagnostics(state.store.as_deref(), &state.config.database).await)
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
