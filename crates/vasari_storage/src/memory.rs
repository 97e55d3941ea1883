//! In-process catalog store.

use crate::{AttachOutcome, CatalogStore};
use parking_lot::RwLock;
use std::collections::HashMap;
use vasari_core::{FileLocator, SeriesDoc, normalize_series_key};
use vasari_error::VasariResult;

/// In-memory backend.
///
/// Suitable for tests and single-process embeddings. Point updates run under
/// the write guard, so the existed-before observation and the merge are one
/// atomic step.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    series: RwLock<HashMap<String, SeriesDoc>>,
}

impl MemoryCatalog {
    /// Create an empty in-memory catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CatalogStore for MemoryCatalog {
    async fn get_series(&self, series_key: &str) -> VasariResult<Option<SeriesDoc>> {
        Ok(self.series.read().get(series_key).cloned())
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
        let key = normalize_series_key(display_name);
        let mut series = self.series.write();
        let doc = series
            .entry(key)
            .or_insert_with(|| SeriesDoc::new(display_name));
        let existed = doc.attach(season_key, episode_key, quality, locator);
        Ok(AttachOutcome::new(existed))
    }

    #[tracing::instrument(skip(self, doc), fields(series = %doc.series_key))]
    async fn import_series(&self, doc: SeriesDoc) -> VasariResult<()> {
        self.series.write().insert(doc.series_key.clone(), doc);
        Ok(())
    }
}
