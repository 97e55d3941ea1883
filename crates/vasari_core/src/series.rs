//! The series document tree.
//!
//! One document per series, shaped exactly like the persisted layout:
//! `{ seriesKey, displayName, seasons: { S1: { episodes: { E1: { qualities:
//! { 720p: locator } } } } } }`. All maps are `BTreeMap`, so iteration order
//! is the lexicographic key order the menu rendering contract requires.

use crate::{FileLocator, normalize_series_key};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use vasari_error::{CatalogError, CatalogErrorKind};

/// One quality-to-locator map for a single episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Free-form, case-sensitive quality labels (e.g. "720p") to locators.
    #[serde(default)]
    pub qualities: BTreeMap<String, FileLocator>,
}

impl Episode {
    /// Look up the locator for a quality label.
    pub fn quality(&self, label: &str) -> Option<&FileLocator> {
        self.qualities.get(label)
    }
}

/// One season: episode key to episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Canonical episode keys (`E1`-style) to episodes.
    #[serde(default)]
    pub episodes: BTreeMap<String, Episode>,
}

impl Season {
    /// Look up an episode by canonical key.
    pub fn episode(&self, key: &str) -> Option<&Episode> {
        self.episodes.get(key)
    }

    /// Sorted, de-duplicated union of quality labels across the season.
    pub fn quality_labels(&self) -> BTreeSet<String> {
        self.episodes
            .values()
            .flat_map(|ep| ep.qualities.keys().cloned())
            .collect()
    }

    /// Locators for every episode carrying the given quality, in episode key
    /// order.
    pub fn locators_for_quality<'a>(&'a self, label: &str) -> Vec<(&'a str, &'a FileLocator)> {
        self.episodes
            .iter()
            .filter_map(|(key, ep)| ep.quality(label).map(|loc| (key.as_str(), loc)))
            .collect()
    }
}

/// The root catalog entity, one document per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDoc {
    /// Canonical key: lower-cased, trimmed display name.
    ///
    /// Optional on deserialize: imports may carry only a display name, and
    /// the key is re-derived from it anyway.
    #[serde(default)]
    pub series_key: String,
    /// Original display casing, retained for prompts.
    #[serde(default)]
    pub display_name: String,
    /// Canonical season keys (`S1`-style) to seasons.
    #[serde(default)]
    pub seasons: BTreeMap<String, Season>,
}

impl SeriesDoc {
    /// Create an empty series document for a display name.
    pub fn new(display_name: &str) -> Self {
        Self {
            series_key: normalize_series_key(display_name),
            display_name: display_name.trim().to_string(),
            seasons: BTreeMap::new(),
        }
    }

    /// Look up a season by canonical key.
    pub fn season(&self, key: &str) -> Option<&Season> {
        self.seasons.get(key)
    }

    /// Set exactly one (season, episode, quality) leaf, creating missing
    /// intermediates. Never touches sibling seasons, episodes, or qualities.
    ///
    /// Returns whether the episode key existed before this write; the upload
    /// session uses that flag to decide cursor advancement.
    pub fn attach(
        &mut self,
        season_key: &str,
        episode_key: &str,
        quality: &str,
        locator: FileLocator,
    ) -> bool {
        let season = self.seasons.entry(season_key.to_string()).or_default();
        let existed = season.episodes.contains_key(episode_key);
        season
            .episodes
            .entry(episode_key.to_string())
            .or_default()
            .qualities
            .insert(quality.to_string(), locator);
        existed
    }

    /// Sorted, de-duplicated union of quality labels across all seasons.
    pub fn quality_labels(&self) -> BTreeSet<String> {
        self.seasons
            .values()
            .flat_map(|season| season.quality_labels())
            .collect()
    }

    /// Locators for every episode in the series carrying the given quality,
    /// ordered by (season key, episode key).
    pub fn locators_for_quality<'a>(
        &'a self,
        label: &str,
    ) -> Vec<(&'a str, &'a str, &'a FileLocator)> {
        self.seasons
            .iter()
            .flat_map(|(season_key, season)| {
                season
                    .locators_for_quality(label)
                    .into_iter()
                    .map(move |(ep, loc)| (season_key.as_str(), ep, loc))
            })
            .collect()
    }

    /// Validate and deserialize a bulk-import document.
    ///
    /// Requires at minimum a non-empty series name and a `seasons` container;
    /// the canonical key is re-derived from the name, so imports cannot smuggle
    /// in a key that disagrees with the display name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` when required fields are missing or mistyped.
    pub fn from_import(value: serde_json::Value) -> Result<Self, CatalogError> {
        let name = value
            .get("displayName")
            .or_else(|| value.get("seriesKey"))
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                CatalogError::new(CatalogErrorKind::InvalidShape(
                    "missing series name".to_string(),
                ))
            })?
            .to_string();

        if !value.get("seasons").is_some_and(serde_json::Value::is_object) {
            return Err(CatalogError::new(CatalogErrorKind::InvalidShape(
                "missing seasons container".to_string(),
            )));
        }

        let mut doc: Self = serde_json::from_value(value)
            .map_err(|e| CatalogError::new(CatalogErrorKind::InvalidShape(e.to_string())))?;
        doc.display_name = name;
        doc.series_key = normalize_series_key(&doc.display_name);
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(raw: &str) -> FileLocator {
        FileLocator::from_raw(raw)
    }

    #[test]
    fn attach_creates_intermediates_and_reports_existence() {
        let mut doc = SeriesDoc::new("Breaking Bad");
        assert_eq!(doc.series_key, "breaking bad");

        let existed = doc.attach("S1", "E1", "720p", locator("file-1"));
        assert!(!existed);
        let existed = doc.attach("S1", "E1", "1080p", locator("file-2"));
        assert!(existed);
    }

    #[test]
    fn attach_never_touches_siblings() {
        let mut doc = SeriesDoc::new("show");
        doc.attach("S1", "E1", "720p", locator("a"));
        doc.attach("S1", "E2", "720p", locator("b"));
        doc.attach("S2", "E1", "480p", locator("c"));

        doc.attach("S1", "E1", "720p", locator("a2"));

        assert_eq!(
            doc.season("S1").unwrap().episode("E1").unwrap().quality("720p").unwrap().as_str(),
            "a2"
        );
        assert_eq!(
            doc.season("S1").unwrap().episode("E2").unwrap().quality("720p").unwrap().as_str(),
            "b"
        );
        assert_eq!(
            doc.season("S2").unwrap().episode("E1").unwrap().quality("480p").unwrap().as_str(),
            "c"
        );
    }

    #[test]
    fn quality_labels_are_sorted_union() {
        let mut doc = SeriesDoc::new("show");
        doc.attach("S1", "E1", "720p", locator("a"));
        doc.attach("S1", "E2", "480p", locator("b"));
        doc.attach("S2", "E1", "720p", locator("c"));

        let labels: Vec<_> = doc.quality_labels().into_iter().collect();
        assert_eq!(labels, vec!["480p".to_string(), "720p".to_string()]);
    }

    #[test]
    fn import_requires_name_and_seasons() {
        let missing_name = serde_json::json!({ "seasons": {} });
        assert!(SeriesDoc::from_import(missing_name).is_err());

        let missing_seasons = serde_json::json!({ "displayName": "Show" });
        assert!(SeriesDoc::from_import(missing_seasons).is_err());

        let ok = serde_json::json!({
            "displayName": "Show",
            "seasons": { "S1": { "episodes": { "E1": { "qualities": { "720p": "f" } } } } }
        });
        let doc = SeriesDoc::from_import(ok).unwrap();
        assert_eq!(doc.series_key, "show");
        assert!(doc.season("S1").unwrap().episode("E1").is_some());
    }

    #[test]
    fn import_accepts_documents_without_series_key() {
        let value = serde_json::json!({
            "displayName": "Mr. Robot",
            "seasons": { "S1": { "episodes": { "E1": { "qualities": { "720p": "f" } } } } }
        });

        let doc = SeriesDoc::from_import(value).unwrap();
        assert_eq!(doc.series_key, "mr. robot");
        assert_eq!(doc.display_name, "Mr. Robot");
        assert!(doc.season("S1").unwrap().episode("E1").is_some());
    }

    #[test]
    fn document_round_trips_in_persisted_shape() {
        let mut doc = SeriesDoc::new("Breaking Bad");
        doc.attach("S1", "E1", "720p", locator("https://example.com/f"));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["seriesKey"], "breaking bad");
        assert_eq!(json["displayName"], "Breaking Bad");
        assert_eq!(
            json["seasons"]["S1"]["episodes"]["E1"]["qualities"]["720p"],
            "https://example.com/f"
        );

        let back: SeriesDoc = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
