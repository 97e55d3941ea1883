//! Integration tests for the catalog store backends.
//!
//! The merge law under test: attaching one leaf never disturbs sibling
//! leaves, while a bulk import is a full replace and legitimately can.

use vasari_core::{FileLocator, SeriesDoc};
use vasari_storage::{CatalogStore, FileCatalog, MemoryCatalog};

async fn attach(store: &dyn CatalogStore, episode: &str, quality: &str, raw: &str) {
    store
        .attach_file("Breaking Bad", "S1", episode, quality, FileLocator::from_raw(raw))
        .await
        .expect("attach failed");
}

async fn exercise_merge_law(store: &dyn CatalogStore) {
    attach(store, "E1", "720p", "file-e1-720").await;
    attach(store, "E2", "720p", "file-e2-720").await;

    // Overwrite one leaf; siblings must be untouched.
    attach(store, "E1", "720p", "file-e1-720-v2").await;
    attach(store, "E1", "1080p", "file-e1-1080").await;

    let doc = store
        .get_series("breaking bad")
        .await
        .expect("read failed")
        .expect("series missing");

    let e1 = doc.season("S1").unwrap().episode("E1").unwrap();
    assert_eq!(e1.quality("720p").unwrap().as_str(), "file-e1-720-v2");
    assert_eq!(e1.quality("1080p").unwrap().as_str(), "file-e1-1080");

    let e2 = doc.season("S1").unwrap().episode("E2").unwrap();
    assert_eq!(e2.quality("720p").unwrap().as_str(), "file-e2-720");
}

#[tokio::test]
async fn memory_attach_is_non_destructive() {
    let store = MemoryCatalog::new();
    exercise_merge_law(&store).await;
}

#[tokio::test]
async fn filesystem_attach_is_non_destructive() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCatalog::new(dir.path()).unwrap();
    exercise_merge_law(&store).await;
}

#[tokio::test]
async fn attach_reports_episode_existence() {
    let store = MemoryCatalog::new();

    let outcome = store
        .attach_file("Show", "S1", "E1", "720p", FileLocator::from_raw("a"))
        .await
        .unwrap();
    assert!(!outcome.episode_existed());

    // Second quality for the same episode: episode already there.
    let outcome = store
        .attach_file("Show", "S1", "E1", "1080p", FileLocator::from_raw("b"))
        .await
        .unwrap();
    assert!(outcome.episode_existed());

    let outcome = store
        .attach_file("Show", "S1", "E2", "720p", FileLocator::from_raw("c"))
        .await
        .unwrap();
    assert!(!outcome.episode_existed());
}

#[tokio::test]
async fn missing_series_reads_as_none() {
    let store = MemoryCatalog::new();
    assert!(store.get_series("nothing here").await.unwrap().is_none());

    let dir = tempfile::tempdir().unwrap();
    let fs = FileCatalog::new(dir.path()).unwrap();
    assert!(fs.get_series("nothing here").await.unwrap().is_none());
}

#[tokio::test]
async fn import_replaces_wholesale() {
    let store = MemoryCatalog::new();
    attach(&store, "E1", "720p", "old-e1").await;
    attach(&store, "E2", "720p", "old-e2").await;

    // Import a document that only knows about E1.
    let mut doc = SeriesDoc::new("Breaking Bad");
    doc.attach("S1", "E1", "720p", FileLocator::from_raw("new-e1"));
    store.import_series(doc).await.unwrap();

    let read = store.get_series("breaking bad").await.unwrap().unwrap();
    let season = read.season("S1").unwrap();
    assert_eq!(
        season.episode("E1").unwrap().quality("720p").unwrap().as_str(),
        "new-e1"
    );
    assert!(season.episode("E2").is_none(), "import is a full replace");
}

#[tokio::test]
async fn filesystem_document_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FileCatalog::new(dir.path()).unwrap();
        store
            .attach_file("The Wire", "S2", "E3", "480p", FileLocator::from_raw("f"))
            .await
            .unwrap();
    }

    let store = FileCatalog::new(dir.path()).unwrap();
    let doc = store.get_series("the wire").await.unwrap().unwrap();
    assert_eq!(
        doc.season("S2").unwrap().episode("E3").unwrap().quality("480p").unwrap().as_str(),
        "f"
    );
}

#[tokio::test]
async fn filesystem_colliding_sanitized_names_share_a_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCatalog::new(dir.path()).unwrap();

    // "ping/pong" and "ping_pong" sanitize to the same file stem.
    store
        .attach_file("Ping/Pong", "S1", "E1", "720p", FileLocator::from_raw("slash"))
        .await
        .unwrap();
    store
        .attach_file("Ping_Pong", "S1", "E2", "720p", FileLocator::from_raw("underscore"))
        .await
        .unwrap();

    // Colliding keys queue on one lock and merge into one document, so
    // neither write clobbers the other.
    let doc = store.get_series("ping/pong").await.unwrap().unwrap();
    let season = doc.season("S1").unwrap();
    assert_eq!(season.episode("E1").unwrap().quality("720p").unwrap().as_str(), "slash");
    assert_eq!(
        season.episode("E2").unwrap().quality("720p").unwrap().as_str(),
        "underscore"
    );
}

#[tokio::test]
async fn concurrent_attaches_to_one_series_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(FileCatalog::new(dir.path()).unwrap());

    let mut handles = Vec::new();
    for n in 1..=8u32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .attach_file(
                    "Show",
                    "S1",
                    &format!("E{n}"),
                    "720p",
                    FileLocator::from_raw(format!("file-{n}")),
                )
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let doc = store.get_series("show").await.unwrap().unwrap();
    assert_eq!(doc.season("S1").unwrap().episodes.len(), 8);
}
