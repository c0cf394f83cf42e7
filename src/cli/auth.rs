use crate::{config::Config, error, mixcloud::Authenticator, success};

/// Obtains and persists an access token.
///
/// Goes through the normal resolution order, so with a valid token already
/// on disk this is a no-op confirmation; otherwise the interactive browser
/// flow runs.
pub async fn auth(config: &Config) {
    let mut authenticator = Authenticator::new(config);
    match authenticator.get_token().await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("Authentication failed: {}", e),
    }
}
