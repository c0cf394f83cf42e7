use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, types::AuthState, warning};

/// Runs the local callback server for one authorization round.
///
/// The task serving this is aborted by the authenticator as soon as a code
/// has been captured or the wait times out, releasing the listening socket.
/// A bind failure is reported as a warning; the authenticator then times out
/// instead of the process dying mid-watch.
pub async fn start_api_server(addr: &str, state: Arc<Mutex<AuthState>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => {
            warning!("Failed to parse server address: {}", e);
            return;
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            warning!("Failed to bind callback server on {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        warning!("Callback server stopped: {}", e);
    }
}
