use std::{path::PathBuf, time::Duration};

use mixupcli::watcher::DirectoryPoller;

// Unique folder under the system temp dir so parallel tests never collide
fn temp_folder(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("mixupcli-test-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).expect("failed to create test folder");
    path
}

fn touch(folder: &PathBuf, filename: &str) -> PathBuf {
    let path = folder.join(filename);
    std::fs::write(&path, b"x").expect("failed to write test file");
    path
}

#[tokio::test]
async fn test_scan_discovers_only_mp3_files() {
    let folder = temp_folder("scan-mp3-only");
    let mp3 = touch(&folder, "Show 01.02.2025.mp3");
    touch(&folder, "notes.txt");
    std::fs::create_dir_all(folder.join("nested")).unwrap();
    touch(&folder.join("nested"), "deep.mp3"); // non-recursive: ignored

    let mut poller = DirectoryPoller::new(folder.clone(), Duration::from_secs(1));
    let found = poller.scan().await;

    assert_eq!(found, vec![mp3]);

    let _ = std::fs::remove_dir_all(folder);
}

#[tokio::test]
async fn test_scan_never_offers_a_path_twice() {
    let folder = temp_folder("scan-dedup");
    let first = touch(&folder, "First.mp3");

    let mut poller = DirectoryPoller::new(folder.clone(), Duration::from_secs(1));

    assert_eq!(poller.scan().await, vec![first.clone()]);
    // The file is still present but already dispatched; a later cycle
    // must not offer it again.
    assert!(poller.scan().await.is_empty());

    // A genuinely new file is picked up while the old one stays seen.
    let second = touch(&folder, "Second.mp3");
    assert_eq!(poller.scan().await, vec![second]);

    let _ = std::fs::remove_dir_all(folder);
}

#[tokio::test]
async fn test_scan_keys_on_path_so_replacement_is_not_reoffered() {
    let folder = temp_folder("scan-replace");
    let path = touch(&folder, "Show.mp3");

    let mut poller = DirectoryPoller::new(folder.clone(), Duration::from_secs(1));
    assert_eq!(poller.scan().await.len(), 1);

    // Delete and re-create under the same name with different content;
    // the path identity is unchanged, so nothing new is discovered.
    std::fs::remove_file(&path).unwrap();
    std::fs::write(&path, b"different bytes").unwrap();
    assert!(poller.scan().await.is_empty());

    let _ = std::fs::remove_dir_all(folder);
}

#[tokio::test]
async fn test_scan_relocated_file_is_never_reenumerated() {
    let folder = temp_folder("scan-relocated");
    let path = touch(&folder, "Done.mp3");

    let mut poller = DirectoryPoller::new(folder.clone(), Duration::from_secs(1));
    assert_eq!(poller.scan().await, vec![path.clone()]);

    // A successful upload moves the file out of the watch folder; from
    // the poller's perspective the path simply stops existing.
    std::fs::remove_file(&path).unwrap();
    assert!(poller.scan().await.is_empty());

    let _ = std::fs::remove_dir_all(folder);
}

#[tokio::test]
async fn test_scan_missing_folder_yields_nothing() {
    let folder = temp_folder("scan-missing");
    std::fs::remove_dir_all(&folder).unwrap();

    let mut poller = DirectoryPoller::new(folder, Duration::from_secs(1));
    assert!(poller.scan().await.is_empty());
}
