use std::path::PathBuf;

use mixupcli::management::{MetadataCatalog, TokenStore};

// Unique path under the system temp dir so parallel tests never collide
fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("mixupcli-test-{}-{}", std::process::id(), name));
    path
}

fn write_csv(name: &str, content: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, content).expect("failed to write test csv");
    path
}

#[tokio::test]
async fn test_catalog_load_splits_and_trims_tags() {
    let path = write_csv(
        "catalog-tags.csv",
        "show,bio,host,tags\nLate Night Radio,Selectors.,Ana,house; ambient ;;techno\n",
    );

    let catalog = MetadataCatalog::load(&path).await;
    let meta = catalog.get("Late Night Radio").expect("show should load");

    assert_eq!(meta.bio, "Selectors.");
    assert_eq!(meta.host, "Ana");
    assert_eq!(meta.tags, vec!["house", "ambient", "techno"]);

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_catalog_load_handles_quoted_bio() {
    let path = write_csv(
        "catalog-quoted.csv",
        "show,bio,host,tags\nMy Show,\"A bio, with commas\",Host,tag\n",
    );

    let catalog = MetadataCatalog::load(&path).await;
    let meta = catalog.get("My Show").expect("show should load");

    assert_eq!(meta.bio, "A bio, with commas");

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_catalog_skips_rows_without_show_name() {
    let path = write_csv(
        "catalog-blank.csv",
        "show,bio,host,tags\n ,ignored,ignored,ignored\nKept,bio,host,tag\n",
    );

    let catalog = MetadataCatalog::load(&path).await;

    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("Kept").is_some());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_catalog_duplicate_show_is_last_write_wins() {
    let path = write_csv(
        "catalog-dup.csv",
        "show,bio,host,tags\nShow,first,A,one\nShow,second,B,two\n",
    );

    let catalog = MetadataCatalog::load(&path).await;
    let meta = catalog.get("Show").expect("show should load");

    assert_eq!(catalog.len(), 1);
    assert_eq!(meta.bio, "second");
    assert_eq!(meta.host, "B");

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_catalog_missing_file_yields_empty_catalog() {
    let path = temp_path("catalog-does-not-exist.csv");

    let catalog = MetadataCatalog::load(&path).await;

    assert!(catalog.is_empty());
    // Lookups against the empty catalog just miss; uploads then proceed
    // with empty bio/host/tags.
    assert!(catalog.get("Anything").is_none());
}

#[tokio::test]
async fn test_catalog_skips_malformed_rows() {
    let path = write_csv(
        "catalog-malformed.csv",
        "show,bio,host,tags\nGood,bio,host,tag\nbad,row,with,too,many,fields\n",
    );

    let catalog = MetadataCatalog::load(&path).await;

    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("Good").is_some());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_token_store_round_trip() {
    let path = temp_path("token-roundtrip.txt");
    let store = TokenStore::new(path.clone());

    store.persist("abc123token").await.expect("persist failed");
    let loaded = store.load().await.expect("load failed");

    assert_eq!(loaded.as_deref(), Some("abc123token"));

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_token_store_creates_parent_dirs() {
    let mut path = temp_path("token-nested");
    path.push("deeper");
    path.push("token.txt");
    let store = TokenStore::new(path.clone());

    store.persist("tok").await.expect("persist failed");
    assert_eq!(store.load().await.unwrap().as_deref(), Some("tok"));

    let _ = std::fs::remove_dir_all(temp_path("token-nested"));
}

#[tokio::test]
async fn test_token_store_missing_file_is_none() {
    let store = TokenStore::new(temp_path("token-missing.txt"));

    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_token_store_blank_file_is_none() {
    let path = temp_path("token-blank.txt");
    std::fs::write(&path, "  \n").expect("failed to write test token");
    let store = TokenStore::new(path.clone());

    assert_eq!(store.load().await.unwrap(), None);

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_token_store_delete_removes_file() {
    let path = temp_path("token-delete.txt");
    let store = TokenStore::new(path.clone());

    store.persist("tok").await.expect("persist failed");
    store.delete().await.expect("delete failed");

    assert!(!path.exists());
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_token_store_delete_is_idempotent() {
    let store = TokenStore::new(temp_path("token-delete-missing.txt"));

    assert!(store.delete().await.is_ok());
}
