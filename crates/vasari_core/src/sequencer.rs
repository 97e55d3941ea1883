//! Episode number sequencing.

use crate::{SeriesDoc, parse_episode_number};

/// Compute the next free episode number for a series and season.
///
/// Returns 1 when the series or season is absent or empty; otherwise
/// `max(existing) + 1`. Gaps are not filled: after `E1..E5` with no `E3`,
/// the next number is still 6. Episode keys that do not parse are skipped
/// rather than failing the whole read.
///
/// The result is advisory: it comes from a snapshot with no compare-and-swap,
/// so two admins targeting the same season concurrently can be handed the
/// same number (see the storage crate for where the write itself is
/// serialized).
///
/// # Examples
///
/// ```
/// use vasari_core::{FileLocator, SeriesDoc, next_episode_number};
///
/// let mut doc = SeriesDoc::new("show");
/// assert_eq!(next_episode_number(Some(&doc), "S1"), 1);
///
/// doc.attach("S1", "E5", "720p", FileLocator::from_raw("f"));
/// assert_eq!(next_episode_number(Some(&doc), "S1"), 6);
/// ```
pub fn next_episode_number(series: Option<&SeriesDoc>, season_key: &str) -> u32 {
    let Some(season) = series.and_then(|doc| doc.season(season_key)) else {
        return 1;
    };
    let max = season
        .episodes
        .keys()
        .filter_map(|key| match parse_episode_number(key) {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::debug!(key = %key, "Skipping unparsable episode key");
                None
            }
        })
        .max();
    max.map_or(1, |n| n + 1)
}
