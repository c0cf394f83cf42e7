use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, http::StatusCode, response::Html};
use tokio::sync::Mutex;

use crate::types::AuthState;

/// Captures the authorization code from the OAuth browser redirect.
///
/// Stores the first `code` query parameter into the shared state the
/// authenticator is polling, and tells the user the browser window can be
/// closed. A request without a `code` parameter is answered with 400.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<AuthState>>>,
) -> (StatusCode, Html<&'static str>) {
    if let Some(code) = params.get("code") {
        let mut state = shared_state.lock().await;
        if state.code.is_none() {
            state.code = Some(code.clone());
        }
        (
            StatusCode::OK,
            Html("<h2>Authorization complete.</h2><p>You can close this browser window.</p>"),
        )
    } else {
        (StatusCode::BAD_REQUEST, Html("<h4>Missing code parameter.</h4>"))
    }
}
