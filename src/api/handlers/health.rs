//! Health, readiness, metrics and fallback handlers.

use axum::{Json, extract::State, http::StatusCode, http::Uri};
use serde_json::{Value, json};

use crate::api::state::AppState;
use crate::error::{AppError, ErrorCode};

/// Liveness check - always returns 200 if the service is running.
pub async fn health() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Readiness check - checks that the form can serve requests.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let form_ok = state.generator.is_ready();

    let status_code = if form_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = Json(json!({
        "code": if form_ok { 0 } else { ErrorCode::SERVICE_UNAVAILABLE.as_i32() },
        "message": if form_ok { "success" } else { "service unavailable" },
        "data": {
            "ready": form_ok,
            "components": {
                "form": form_ok
            }
        }
    }));

    (status_code, response)
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    let mut output = String::new();

    output.push_str("# HELP idgen_up Whether the service is up\n");
    output.push_str("# TYPE idgen_up gauge\n");
    output.push_str("idgen_up 1\n");

    if let Some(handle) = &state.metrics {
        output.push_str(&handle.render());
    }

    output
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
