use std::path::PathBuf;

use crate::{
    config::Config,
    error,
    management::MetadataCatalog,
    mixcloud::{Authenticator, Uploader},
    types::UploadResult,
};

/// One-shot upload of a single file, outside the watch loop.
///
/// Unlike the poller, a failure here exits non-zero so the command is
/// scriptable; the detailed cause has already been logged by the uploader.
pub async fn upload(config: &Config, file: PathBuf) {
    let authenticator = Authenticator::new(config);
    let catalog = MetadataCatalog::load(&config.metadata_file).await;
    let mut uploader = Uploader::new(
        authenticator,
        catalog,
        config.shows_folder.clone(),
        config.site_url.clone(),
        config.upload_url.clone(),
    );

    match uploader.upload(&file).await {
        UploadResult::Success => {}
        UploadResult::AuthFailure => {
            error!("Upload rejected for authorization; the saved token was cleared. Run again to re-authenticate.")
        }
        UploadResult::OtherFailure => error!("Upload failed."),
    }
}
