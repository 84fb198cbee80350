//! HTTP surface of the scripting relay.

use crate::invoker::{HostScriptInvoker, InvokeError, ScriptOutcome};
use anyhow::Result;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Start the relay server.
pub async fn serve(addr: &str, invoker: Arc<dyn HostScriptInvoker>) -> Result<()> {
    let app = create_router(invoker);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Scripting relay listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the relay router.
pub fn create_router(invoker: Arc<dyn HostScriptInvoker>) -> Router {
    Router::new()
        .route("/run-extendscript", post(run_extendscript))
        .route("/health", get(health_check))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CorsLayer::permissive())
        .with_state(invoker)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "montage-relay",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Body of `POST /run-extendscript`.
#[derive(Debug, Deserialize)]
pub struct RunScriptRequest {
    #[serde(rename = "functionName")]
    pub function_name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Forward one host-script call and return its parsed result.
///
/// Relay-level failures are data, not HTTP status: the caller always gets a
/// 200 with either the engine's JSON or a `{success: false, ...}` envelope.
async fn run_extendscript(
    State(invoker): State<Arc<dyn HostScriptInvoker>>,
    Json(req): Json<RunScriptRequest>,
) -> Json<Value> {
    match invoker.invoke(&req.function_name, &req.args).await {
        Ok(value) => Json(value),
        Err(InvokeError::Parse { raw }) => {
            tracing::warn!(function = %req.function_name, "unparseable host response");
            Json(
                serde_json::to_value(ScriptOutcome::unparseable(
                    "Failed to parse ExtendScript result",
                    raw,
                ))
                .unwrap_or(Value::Null),
            )
        }
        Err(e) => {
            tracing::warn!(function = %req.function_name, error = %e, "host call failed");
            Json(serde_json::to_value(ScriptOutcome::failed(e.to_string())).unwrap_or(Value::Null))
        }
    }
}
