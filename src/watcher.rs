use std::{collections::HashSet, path::PathBuf, time::Duration};

use crate::{info, mixcloud::Uploader, warning};

/// Polls the watch folder and feeds newly discovered files to the uploader.
///
/// One logical thread of control: files are uploaded one at a time, in
/// whatever order the directory listing yields. The seen set is keyed by
/// path, lives only for the process lifetime and grows monotonically, so a
/// restart re-scans the folder and may re-offer files whose earlier upload
/// failed. A path is marked seen before its upload runs; a failed upload is
/// therefore never retried by the poller, while a successful one removes the
/// file from the folder altogether.
pub struct DirectoryPoller {
    watch_folder: PathBuf,
    interval: Duration,
    seen: HashSet<PathBuf>,
}

impl DirectoryPoller {
    pub fn new(watch_folder: PathBuf, interval: Duration) -> Self {
        DirectoryPoller {
            watch_folder,
            interval,
            seen: HashSet::new(),
        }
    }

    /// Runs the poll loop; it never returns, only process termination
    /// stops it.
    ///
    /// # Cycle Behavior
    ///
    /// Each cycle scans the watch folder once, uploads every newly
    /// discovered file one at a time in directory order, then sleeps for
    /// the configured interval — the sleep is fixed regardless of how many
    /// files the scan produced or how long their uploads took.
    ///
    /// # Error Handling
    ///
    /// Nothing escapes a cycle. Upload outcomes are logged inside the
    /// uploader; an auth failure invalidates the token so the next upload
    /// re-authenticates; an unreadable watch folder is a warning and the
    /// loop simply tries again next cycle. There is no graceful-shutdown
    /// hook — stopping the process is the only stop condition.
    ///
    /// # Example
    ///
    /// ```
    /// let mut poller = DirectoryPoller::new(config.watch_folder.clone(), config.poll_interval());
    /// poller.run(&mut uploader).await; // never returns
    /// ```
    pub async fn run(&mut self, uploader: &mut Uploader) {
        info!("Watching folder: {}", self.watch_folder.display());
        loop {
            let new_files = self.scan().await;
            for path in new_files {
                uploader.upload(&path).await;
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Performs one discovery step: enumerates `*.mp3` files directly
    /// inside the watch folder and returns the ones not seen before,
    /// marking them seen.
    ///
    /// # Returns
    ///
    /// The paths discovered for the first time this process lifetime, in
    /// whatever order the directory listing yields — no defined sort.
    ///
    /// # Dedup Semantics
    ///
    /// A path enters the seen set here, BEFORE its upload outcome is
    /// known, so a file whose upload later fails is never offered again by
    /// this poller. Deletion and re-creation under the same name during
    /// the process lifetime is likewise not re-offered: the key is the
    /// path, not the content. Only a restart clears the set.
    ///
    /// Non-recursive; subdirectories and non-mp3 files are ignored, and an
    /// unreadable folder logs a warning and yields nothing this cycle.
    pub async fn scan(&mut self) -> Vec<PathBuf> {
        let mut entries = match tokio::fs::read_dir(&self.watch_folder).await {
            Ok(entries) => entries,
            Err(e) => {
                warning!(
                    "Cannot read watch folder '{}': {}",
                    self.watch_folder.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut new_files = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warning!("Cannot read directory entry: {}", e);
                    break;
                }
            };

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("mp3") {
                continue;
            }
            if self.seen.insert(path.clone()) {
                new_files.push(path);
            }
        }

        new_files
    }
}
