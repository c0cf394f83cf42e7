use std::{fmt, sync::Arc, time::Duration};

use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use crate::{
    config::Config,
    info,
    management::TokenStore,
    server::start_api_server,
    types::{AuthState, TokenResponse},
    warning,
};

/// Failure modes of a `get_token` call.
///
/// Fatal to the current call only, never to the process: the poll loop logs
/// the error and carries on, and the next call re-runs the flow from scratch.
#[derive(Debug)]
pub enum AuthError {
    Http(reqwest::Error),
    Exchange(String),
    Timeout,
    Store(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Http(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Http(e) => write!(f, "http error: {}", e),
            AuthError::Exchange(msg) => write!(f, "token exchange failed: {}", msg),
            AuthError::Timeout => write!(f, "timed out waiting for the OAuth callback"),
            AuthError::Store(msg) => write!(f, "token store error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Owns the bearer token and the machinery to obtain one.
///
/// The token is cached in memory and mirrored to the [`TokenStore`]; at most
/// one valid in-memory token exists at a time. When the remote API rejects
/// it, [`Authenticator::invalidate`] clears both copies and the next
/// [`Authenticator::get_token`] runs the interactive flow again.
pub struct Authenticator {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_url: String,
    token_url: String,
    server_address: String,
    auth_wait: Duration,
    store: TokenStore,
    token: Option<String>,
}

impl Authenticator {
    pub fn new(config: &Config) -> Self {
        Authenticator {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
            server_address: config.server_address.clone(),
            auth_wait: Duration::from_secs(config.auth_wait_secs),
            store: TokenStore::new(config.token_file.clone()),
            token: None,
        }
    }

    /// Returns a bearer token, obtaining one if necessary.
    ///
    /// # Resolution Order
    ///
    /// 1. **Memory**: an already-cached token is returned immediately,
    ///    without any I/O
    /// 2. **Disk**: else the token file is read; a non-empty value is
    ///    cached and returned
    /// 3. **Interactive**: else the full authorization-code flow runs,
    ///    and the fresh token is persisted and cached
    ///
    /// # Returns
    ///
    /// Returns `Ok(String)` with the bearer token, or an [`AuthError`]
    /// describing why no token could be obtained.
    ///
    /// # Error Handling
    ///
    /// A failure here is fatal to this call only. Callers in the poll loop
    /// log it and report the file as failed; the process keeps running and
    /// the next call starts the resolution from scratch. A token that is
    /// obtained but cannot be persisted is still returned — it works for
    /// the lifetime of this process and only the mirror on disk is lost.
    ///
    /// # Example
    ///
    /// ```
    /// let mut authenticator = Authenticator::new(&config);
    /// let token = authenticator.get_token().await?;
    /// // Subsequent calls return the cached token without I/O.
    /// ```
    pub async fn get_token(&mut self) -> Result<String, AuthError> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }

        if let Some(token) = self.store.load().await.map_err(AuthError::Store)? {
            self.token = Some(token.clone());
            return Ok(token);
        }

        let token = self.run_oauth_flow().await?;
        if let Err(e) = self.store.persist(&token).await {
            // A token that cannot be persisted still works for this process.
            warning!("Failed to save token to {}: {}", self.store.path().display(), e);
        } else {
            info!("Saved new token to {}", self.store.path().display());
        }
        self.token = Some(token.clone());
        Ok(token)
    }

    /// Drops the cached token and best-effort deletes the persisted copy.
    ///
    /// Called when the upload endpoint answers 401 or 403: the token the
    /// API just rejected must not be offered again from either cache. A
    /// failed deletion of the token file is logged as a warning and
    /// otherwise ignored — the in-memory clear alone already forces the
    /// next [`Authenticator::get_token`] to re-run the full flow, and a
    /// stale file would be overwritten by its outcome anyway.
    pub async fn invalidate(&mut self) {
        self.token = None;
        if let Err(e) = self.store.delete().await {
            warning!("Failed to remove token file: {}", e);
        }
    }

    /// Runs the interactive authorization-code flow.
    ///
    /// # Authentication Flow
    ///
    /// 1. **Server Start**: launches the local HTTP server that will catch
    ///    the OAuth redirect on the configured address
    /// 2. **Browser Launch**: opens the Mixcloud authorization URL in the
    ///    default browser
    /// 3. **User Authorization**: the user grants access in their browser
    /// 4. **Code Capture**: the `/callback` handler stores the `code`
    ///    query parameter into the shared state this function is polling
    /// 5. **Token Exchange**: the code is posted to the token endpoint and
    ///    traded for an access token
    ///
    /// The server task is aborted as soon as the wait ends — successfully
    /// or not — releasing the listening socket for the next round.
    ///
    /// # Error Handling
    ///
    /// - A browser that refuses to open is a warning with manual URL
    ///   instructions, not a failure; the wait continues either way
    /// - No code within `auth_wait_secs` fails with [`AuthError::Timeout`]
    /// - Exchange failures propagate as [`AuthError::Exchange`] or
    ///   [`AuthError::Http`], with no retry
    async fn run_oauth_flow(&self) -> Result<String, AuthError> {
        let shared_state = Arc::new(Mutex::new(AuthState::default()));

        let server_state = Arc::clone(&shared_state);
        let server_addr = self.server_address.clone();
        let server = tokio::spawn(async move {
            start_api_server(&server_addr, server_state).await;
        });

        let auth_url = format!(
            "{auth_url}?client_id={client_id}&redirect_uri={redirect_uri}&response_type=code",
            auth_url = self.auth_url,
            client_id = self.client_id,
            redirect_uri = self.redirect_uri,
        );

        info!("Opening browser for Mixcloud authorization...");
        if webbrowser::open(&auth_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                auth_url
            );
        }

        info!("Waiting for OAuth callback on {} ...", self.redirect_uri);
        let code = wait_for_code(shared_state, self.auth_wait).await;
        server.abort();

        let code = code.ok_or(AuthError::Timeout)?;
        info!("Got authorization code, exchanging for access token...");
        self.exchange_code(&code).await
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code captured from the OAuth callback
    ///
    /// # Returns
    ///
    /// Returns `Ok(String)` with the access token, or an [`AuthError`]
    /// when the endpoint answers anything but 200 or the response body
    /// carries no `access_token`.
    ///
    /// # Exchange Request
    ///
    /// A single form-encoded POST carrying `client_id`, `client_secret`,
    /// `redirect_uri`, the code, and `grant_type=authorization_code`, as
    /// the Mixcloud token endpoint expects. The authorization code is
    /// single-use and short-lived, so the exchange happens immediately
    /// after capture and is never retried — a failed exchange means a
    /// whole new authorization round.
    async fn exchange_code(&self, code: &str) -> Result<String, AuthError> {
        let client = Client::new();
        let res = client
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AuthError::Exchange(format!(
                "token endpoint answered {}: {}",
                status, body
            )));
        }

        let json: TokenResponse = res.json().await?;
        json.access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::Exchange("no access_token in response".to_string()))
    }
}

/// Waits for the OAuth callback to deliver an authorization code.
///
/// Polls the shared state the callback handler writes into, up to
/// `max_wait`. Runs concurrently with the HTTP server task; the state is
/// accessed through an async mutex, so neither side blocks the other.
///
/// # Arguments
///
/// * `shared_state` - State shared with the `/callback` handler
/// * `max_wait` - Upper bound on the wait, from `auth_wait_secs`
///
/// # Returns
///
/// Returns `Some(String)` with the code as soon as the handler has stored
/// one, or `None` once `max_wait` elapses without a callback.
///
/// # Timeout Behavior
///
/// - Polling interval: 1 second, async sleep, no busy-spinning
/// - The bound exists so an abandoned browser window cannot hang the
///   process forever mid-watch; the caller maps `None` to a timeout error
async fn wait_for_code(shared_state: Arc<Mutex<AuthState>>, max_wait: Duration) -> Option<String> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(code) = &lock.code {
            return Some(code.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
