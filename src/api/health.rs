use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for the local callback server.
///
/// The callback server only exists for the seconds between opening the
/// browser and the redirect landing; hitting this endpoint confirms it
/// really bound to the port named in `redirect_uri` before the
/// authorization round trip is attempted.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
