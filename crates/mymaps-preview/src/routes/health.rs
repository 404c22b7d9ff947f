//! Gateway health check.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::origin::Upstream;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Origin that receives pass-through traffic.
    upstream: String,
}

/// Reports that the gateway is serving and where it relays to. Neither the
/// document store nor the upstream is probed.
pub async fn health_check(State(upstream): State<Upstream>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        upstream: upstream.base_url().to_string(),
    })
}
