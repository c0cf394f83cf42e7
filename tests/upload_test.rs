use std::path::{Path, PathBuf};

use axum::{Router, http::StatusCode, routing::post};
use mixupcli::{
    config::Config,
    management::{MetadataCatalog, TokenStore},
    mixcloud::{Authenticator, Uploader},
    types::UploadResult,
};

// Unique root under the system temp dir so parallel tests never collide
fn temp_root(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("mixupcli-test-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).expect("failed to create test root");
    path
}

fn test_config(root: &Path, upload_url: &str) -> Config {
    Config {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_uri: "http://localhost:8080/callback".to_string(),
        token_file: root.join("token.txt"),
        watch_folder: root.join("uploads"),
        shows_folder: root.join("shows"),
        metadata_file: root.join("shows.csv"),
        poll_interval_secs: 1,
        auth_wait_secs: 1,
        server_address: "127.0.0.1:0".to_string(),
        site_url: "http://dublab.cat".to_string(),
        // Port 1 has no listener; these tests must never reach the
        // interactive flow.
        auth_url: "http://127.0.0.1:1/oauth/authorize".to_string(),
        token_url: "http://127.0.0.1:1/oauth/access_token".to_string(),
        upload_url: upload_url.to_string(),
    }
}

/// Serves a stand-in upload endpoint on an ephemeral port, answering every
/// POST with the given status. Returns the full endpoint URL.
async fn spawn_upload_stub(status: StatusCode) -> String {
    let app = Router::new().route("/upload", post(move || async move { status }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub server");
    let addr = listener.local_addr().expect("stub server has no address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}/upload", addr)
}

/// Builds an uploader whose token comes from a pre-persisted token file,
/// so no test touches the browser flow.
async fn build_uploader(config: &Config) -> Uploader {
    TokenStore::new(config.token_file.clone())
        .persist("test-token")
        .await
        .expect("failed to seed token file");

    let authenticator = Authenticator::new(config);
    let catalog = MetadataCatalog::load(&config.metadata_file).await;
    Uploader::new(
        authenticator,
        catalog,
        config.shows_folder.clone(),
        config.site_url.clone(),
        config.upload_url.clone(),
    )
}

fn place_mp3(config: &Config, filename: &str) -> PathBuf {
    std::fs::create_dir_all(&config.watch_folder).expect("failed to create watch folder");
    let path = config.watch_folder.join(filename);
    std::fs::write(&path, b"not really audio").expect("failed to write test mp3");
    path
}

#[tokio::test]
async fn test_upload_success_relocates_file_into_show_folder() {
    let root = temp_root("upload-ok");
    let upload_url = spawn_upload_stub(StatusCode::OK).await;
    let config = test_config(&root, &upload_url);
    let mp3 = place_mp3(&config, "Late Night Radio 05.03.2024.mp3");

    let mut uploader = build_uploader(&config).await;
    let outcome = uploader.upload(&mp3).await;

    assert_eq!(outcome, UploadResult::Success);
    // Source is gone from the watch folder and sits in the show folder
    // under its original name.
    assert!(!mp3.exists());
    assert!(
        config
            .shows_folder
            .join("Late Night Radio")
            .join("Late Night Radio 05.03.2024.mp3")
            .exists()
    );

    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_upload_forbidden_invalidates_token_and_keeps_file() {
    let root = temp_root("upload-403");
    let upload_url = spawn_upload_stub(StatusCode::FORBIDDEN).await;
    let config = test_config(&root, &upload_url);
    let mp3 = place_mp3(&config, "Show 01.02.2025.mp3");

    let mut uploader = build_uploader(&config).await;
    let outcome = uploader.upload(&mp3).await;

    assert_eq!(outcome, UploadResult::AuthFailure);
    // The rejected token is gone from disk and the file stays put; it is
    // not retried within this call.
    assert!(!config.token_file.exists());
    assert!(mp3.exists());

    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_upload_unauthorized_invalidates_token() {
    let root = temp_root("upload-401");
    let upload_url = spawn_upload_stub(StatusCode::UNAUTHORIZED).await;
    let config = test_config(&root, &upload_url);
    let mp3 = place_mp3(&config, "Show 01.02.2025.mp3");

    let mut uploader = build_uploader(&config).await;
    let outcome = uploader.upload(&mp3).await;

    assert_eq!(outcome, UploadResult::AuthFailure);
    assert!(!config.token_file.exists());

    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_upload_server_error_changes_nothing() {
    let root = temp_root("upload-500");
    let upload_url = spawn_upload_stub(StatusCode::INTERNAL_SERVER_ERROR).await;
    let config = test_config(&root, &upload_url);
    let mp3 = place_mp3(&config, "Show 01.02.2025.mp3");

    let mut uploader = build_uploader(&config).await;
    let outcome = uploader.upload(&mp3).await;

    assert_eq!(outcome, UploadResult::OtherFailure);
    // No state change: token survives, file survives.
    assert!(config.token_file.exists());
    assert!(mp3.exists());

    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_upload_unreachable_endpoint_is_other_failure() {
    let root = temp_root("upload-unreachable");
    let config = test_config(&root, "http://127.0.0.1:1/upload");
    let mp3 = place_mp3(&config, "Show 01.02.2025.mp3");

    let mut uploader = build_uploader(&config).await;
    let outcome = uploader.upload(&mp3).await;

    assert_eq!(outcome, UploadResult::OtherFailure);
    assert!(mp3.exists());

    let _ = std::fs::remove_dir_all(root);
}
