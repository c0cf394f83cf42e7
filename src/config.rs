//! Configuration loading for the Mixcloud show uploader.
//!
//! Configuration lives in a single JSON file supplying the Mixcloud OAuth
//! credentials plus optional overrides for file locations and timings. The
//! file is loaded once at startup into an explicit [`Config`] value that is
//! passed into each component; there is no ambient global state.
//!
//! Lookup order for the file:
//! 1. An explicit `--config` path given on the command line
//! 2. `mixupcli/config.json` in the platform-specific local data directory
//!
//! A missing configuration file is a fatal startup condition.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration, deserialized from `config.json`.
///
/// `client_id`, `client_secret` and `redirect_uri` are required; everything
/// else has a sensible default. The defaults for the Mixcloud endpoint URLs
/// point at the production API and only need overriding in tests.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,

    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
    #[serde(default = "default_watch_folder")]
    pub watch_folder: PathBuf,
    #[serde(default = "default_shows_folder")]
    pub shows_folder: PathBuf,
    #[serde(default = "default_metadata_file")]
    pub metadata_file: PathBuf,

    /// Seconds to sleep between watch-folder scans.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Upper bound in seconds on the wait for the OAuth callback.
    #[serde(default = "default_auth_wait_secs")]
    pub auth_wait_secs: u64,
    /// Bind address of the local callback server. The port must match the
    /// port in `redirect_uri`.
    #[serde(default = "default_server_address")]
    pub server_address: String,

    /// Base URL used to build tracklist links in upload descriptions.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
}

fn default_token_file() -> PathBuf {
    let mut path = data_dir();
    path.push("token.txt");
    path
}

fn default_watch_folder() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_shows_folder() -> PathBuf {
    PathBuf::from("shows")
}

fn default_metadata_file() -> PathBuf {
    PathBuf::from("shows.csv")
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_auth_wait_secs() -> u64 {
    300
}

fn default_server_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_site_url() -> String {
    "http://dublab.cat".to_string()
}

fn default_auth_url() -> String {
    "https://www.mixcloud.com/oauth/authorize".to_string()
}

fn default_token_url() -> String {
    "https://www.mixcloud.com/oauth/access_token".to_string()
}

fn default_upload_url() -> String {
    "https://api.mixcloud.com/upload/".to_string()
}

/// Returns the application's directory inside the local data dir.
///
/// - Linux: `~/.local/share/mixupcli`
/// - macOS: `~/Library/Application Support/mixupcli`
/// - Windows: `%LOCALAPPDATA%/mixupcli`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mixupcli");
    path
}

/// Returns the default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    let mut path = data_dir();
    path.push("config.json");
    path
}

impl Config {
    /// Loads the configuration from `path`, or from the default location
    /// when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error string when the file is missing, unreadable, or not
    /// valid JSON. Callers treat this as fatal.
    pub async fn load(path: Option<PathBuf>) -> Result<Self, String> {
        let path = path.unwrap_or_else(default_config_path);
        let content = async_fs::read_to_string(&path).await.map_err(|e| {
            format!(
                "config file '{path}' not found or unreadable: {e}",
                path = path.display()
            )
        })?;
        serde_json::from_str(&content)
            .map_err(|e| format!("config file '{}' is invalid: {}", path.display(), e))
    }

    /// The poll interval as a [`std::time::Duration`].
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}
