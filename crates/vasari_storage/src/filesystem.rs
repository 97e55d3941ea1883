//! Filesystem-backed catalog store.
//!
//! One JSON document per series under a base directory. Writers for the same
//! series queue on a per-series async mutex, so the read-merge-write of a
//! point update is a single atomic step from the catalog's point of view, and
//! the temp-file + rename write keeps readers from ever seeing a torn
//! document.

use crate::{AttachOutcome, CatalogStore};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use vasari_core::{FileLocator, SeriesDoc, normalize_series_key};
use vasari_error::{StoreError, StoreErrorKind, VasariResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Filesystem storage backend.
///
/// Layout: `{base_path}/{series_key}.json`, where path-hostile characters in
/// the key are replaced with `_`.
#[derive(Debug)]
pub struct FileCatalog {
    base_path: PathBuf,
    timeout: Duration,
    locks: parking_lot::Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FileCatalog {
    /// Create a new filesystem catalog rooted at `base_path`.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> VasariResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StoreError::new(StoreErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem catalog");
        Ok(Self {
            base_path,
            timeout: DEFAULT_TIMEOUT,
            locks: parking_lot::Mutex::new(HashMap::new()),
        })
    }

    /// Override the bounded timeout applied to every store operation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run a store operation under the bounded timeout.
    async fn bounded<T, F>(&self, op: F) -> VasariResult<T>
    where
        F: Future<Output = VasariResult<T>>,
    {
        tokio::time::timeout(self.timeout, op).await.map_err(|_| {
            StoreError::new(StoreErrorKind::Timeout(self.timeout.as_millis() as u64))
        })?
    }

    /// The on-disk file stem for a series key, with path-hostile characters
    /// replaced by `_`.
    ///
    /// Sanitization can collide (`a/b` and `a_b` share a stem); colliding
    /// keys share one document and one write lock, so they merge rather than
    /// race.
    fn file_stem(series_key: &str) -> String {
        series_key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// The document path for an on-disk file stem.
    fn doc_path(&self, stem: &str) -> PathBuf {
        self.base_path.join(format!("{stem}.json"))
    }

    /// The write lock for one on-disk document.
    ///
    /// Keyed by file stem, not series key, so every key that maps to the same
    /// document queues on the same lock. One entry per document ever touched;
    /// the map is bounded by the catalog size.
    fn series_lock(&self, stem: &str) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .entry(stem.to_string())
            .or_default()
            .clone()
    }

    async fn read_doc(&self, path: &PathBuf) -> VasariResult<Option<SeriesDoc>> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::new(StoreErrorKind::DocumentRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };
        let doc = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::new(StoreErrorKind::Serialization(e.to_string())))?;
        Ok(Some(doc))
    }

    async fn write_doc(&self, path: &PathBuf, doc: &SeriesDoc) -> VasariResult<()> {
        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| StoreError::new(StoreErrorKind::Serialization(e.to_string())))?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
            StoreError::new(StoreErrorKind::DocumentWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StoreError::new(StoreErrorKind::DocumentWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for FileCatalog {
    #[tracing::instrument(skip(self), fields(series = %series_key))]
    async fn get_series(&self, series_key: &str) -> VasariResult<Option<SeriesDoc>> {
        let path = self.doc_path(&Self::file_stem(series_key));
        self.bounded(self.read_doc(&path)).await
    }

    #[tracing::instrument(skip(self, locator), fields(season = %season_key, episode = %episode_key, quality = %quality))]
    async fn attach_file(
        &self,
        display_name: &str,
        season_key: &str,
        episode_key: &str,
        quality: &str,
        locator: FileLocator,
    ) -> VasariResult<AttachOutcome> {
        let series_key = normalize_series_key(display_name);
        let stem = Self::file_stem(&series_key);
        let path = self.doc_path(&stem);
        let lock = self.series_lock(&stem);
        let _guard = lock.lock().await;

        let outcome = self
            .bounded(async {
                let mut doc = self
                    .read_doc(&path)
                    .await?
                    .unwrap_or_else(|| SeriesDoc::new(display_name));
                let existed = doc.attach(season_key, episode_key, quality, locator);
                self.write_doc(&path, &doc).await?;
                Ok(AttachOutcome::new(existed))
            })
            .await?;

        tracing::info!(
            series = %series_key,
            season = %season_key,
            episode = %episode_key,
            quality = %quality,
            episode_existed = outcome.episode_existed(),
            "Attached file locator"
        );
        Ok(outcome)
    }

    #[tracing::instrument(skip(self, doc), fields(series = %doc.series_key))]
    async fn import_series(&self, doc: SeriesDoc) -> VasariResult<()> {
        let stem = Self::file_stem(&doc.series_key);
        let path = self.doc_path(&stem);
        let lock = self.series_lock(&stem);
        let _guard = lock.lock().await;

        self.bounded(self.write_doc(&path, &doc)).await?;

        tracing::info!(series = %doc.series_key, "Imported series document");
        Ok(())
    }
}
