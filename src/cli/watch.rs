use crate::{
    config::Config,
    error,
    management::MetadataCatalog,
    mixcloud::{Authenticator, Uploader},
    watcher::DirectoryPoller,
};

/// The long-running mode: authenticate up front, then poll the watch folder
/// indefinitely and upload every new file. Never returns.
///
/// Authentication failure before the first cycle is fatal; once the loop is
/// running, auth failures only invalidate the token and the next upload
/// re-runs the flow.
pub async fn watch(config: &Config) {
    let mut authenticator = Authenticator::new(config);
    if let Err(e) = authenticator.get_token().await {
        error!("Authentication failed: {}", e);
    }

    let catalog = MetadataCatalog::load(&config.metadata_file).await;
    let mut uploader = Uploader::new(
        authenticator,
        catalog,
        config.shows_folder.clone(),
        config.site_url.clone(),
        config.upload_url.clone(),
    );

    let mut poller = DirectoryPoller::new(config.watch_folder.clone(), config.poll_interval());
    poller.run(&mut uploader).await
}
