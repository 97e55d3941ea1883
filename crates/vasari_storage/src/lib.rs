//! Pluggable catalog document stores for Vasari.
//!
//! The catalog is a shared mutable resource hit by concurrent chat handlers,
//! so it lives behind a narrow trait: snapshot reads, one atomic point
//! update, and a wholesale import. Backends serialize writers per series key;
//! application code never does read-modify-write on its own copy.
//!
//! # Example
//!
//! ```
//! use vasari_core::FileLocator;
//! use vasari_storage::{CatalogStore, MemoryCatalog};
//!
//! # async fn example() -> vasari_error::VasariResult<()> {
//! let store = MemoryCatalog::new();
//! let outcome = store
//!     .attach_file("Breaking Bad", "S1", "E1", "720p", FileLocator::from_raw("file-1"))
//!     .await?;
//! assert!(!outcome.episode_existed());
//!
//! let doc = store.get_series("breaking bad").await?.unwrap();
//! assert!(doc.season("S1").is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use derive_getters::Getters;
use vasari_core::{FileLocator, SeriesDoc};
use vasari_error::VasariResult;

mod filesystem;
mod memory;

pub use filesystem::FileCatalog;
pub use memory::MemoryCatalog;

/// What an [`CatalogStore::attach_file`] call observed, captured under the
/// backend's write lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct AttachOutcome {
    /// Whether the episode key existed before this write. When false the
    /// write created a new episode and the upload cursor should advance;
    /// when true it only added or overwrote one quality of an existing
    /// episode.
    episode_existed: bool,
}

impl AttachOutcome {
    /// Record an attach observation.
    pub fn new(episode_existed: bool) -> Self {
        Self { episode_existed }
    }
}

/// Trait for pluggable catalog document stores.
///
/// One logical document per series, shaped as
/// `{ seriesKey, displayName, seasons: { ... } }`. Implementations must make
/// `attach_file` atomic at the document level: concurrent attaches to
/// different leaves of the same series may interleave in any order but must
/// never lose one another's writes.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// Snapshot read of one series document by canonical key.
    async fn get_series(&self, series_key: &str) -> VasariResult<Option<SeriesDoc>>;

    /// Set exactly the leaf at (series, season, episode, quality), creating
    /// every missing intermediate and the series document itself if absent.
    ///
    /// Takes the display name rather than the key so the upsert can retain
    /// original casing; the canonical key is derived internally.
    async fn attach_file(
        &self,
        display_name: &str,
        season_key: &str,
        episode_key: &str,
        quality: &str,
        locator: FileLocator,
    ) -> VasariResult<AttachOutcome>;

    /// Replace the named series wholesale with an already-validated document.
    ///
    /// Unlike `attach_file` this is a full replace: episodes present in the
    /// store but absent from `doc` are gone afterwards.
    async fn import_series(&self, doc: SeriesDoc) -> VasariResult<()>;
}

#[async_trait::async_trait]
impl<T: CatalogStore + ?Sized> CatalogStore for std::sync::Arc<T> {
    async fn get_series(&self, series_key: &str) -> VasariResult<Option<SeriesDoc>> {
        (**self).get_series(series_key).await
    }

    async fn attach_file(
        &self,
        display_name: &str,
        season_key: &str,
        episode_key: &str,
        quality: &str,
        locator: FileLocator,
    ) -> VasariResult<AttachOutcome> {
        (**self)
            .attach_file(display_name, season_key, episode_key, quality, locator)
            .await
    }

    async fn import_series(&self, doc: SeriesDoc) -> VasariResult<()> {
        (**self).import_series(doc).await
    }
}
