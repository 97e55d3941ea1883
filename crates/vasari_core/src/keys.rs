//! Canonical key normalization.
//!
//! Series, season, and episode keys are plain strings with a fixed canonical
//! form. The padding policy is **no zero padding**: `S1`, `E1`. Every site
//! that produces or parses a key goes through these functions, so mixing
//! widths cannot fragment the catalog into duplicate seasons.

use vasari_error::{CatalogError, CatalogErrorKind};

/// Normalize a series display name into its canonical key.
///
/// Trims whitespace and lower-cases. Total and idempotent; an empty string is
/// a valid (if degenerate) key, so callers reject empty input upstream.
///
/// # Examples
///
/// ```
/// use vasari_core::normalize_series_key;
///
/// assert_eq!(normalize_series_key("  Breaking Bad "), "breaking bad");
/// assert_eq!(normalize_series_key("breaking bad"), "breaking bad");
/// ```
pub fn normalize_series_key(display: &str) -> String {
    display.trim().to_lowercase()
}

/// Normalize a free-form season label into its canonical `S<n>` key.
///
/// Upper-cases, strips a literal `SEASON` word and/or a leading `S`, trims,
/// then re-prefixes with `S`. A numeric remainder is reformatted without
/// leading zeros; a non-numeric remainder is kept verbatim.
///
/// # Examples
///
/// ```
/// use vasari_core::normalize_season_key;
///
/// assert_eq!(normalize_season_key("1"), "S1");
/// assert_eq!(normalize_season_key("S1"), "S1");
/// assert_eq!(normalize_season_key("Season 1"), "S1");
/// assert_eq!(normalize_season_key("season 01"), "S1");
/// ```
pub fn normalize_season_key(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let rest = upper
        .strip_prefix("SEASON")
        .or_else(|| upper.strip_prefix('S'))
        .unwrap_or(&upper)
        .trim();
    match rest.parse::<u32>() {
        Ok(n) => format!("S{n}"),
        Err(_) => format!("S{rest}"),
    }
}

/// Format an episode number as its canonical `E<n>` key.
///
/// Exact inverse of [`parse_episode_number`].
pub fn normalize_episode_key(n: u32) -> String {
    format!("E{n}")
}

/// Parse an episode number out of an `E<n>` key.
///
/// Strips a leading `E` if present; the remainder must be a non-negative
/// integer.
///
/// # Errors
///
/// Returns `InvalidKey` when the remainder is empty or not all digits.
///
/// # Examples
///
/// ```
/// use vasari_core::parse_episode_number;
///
/// assert_eq!(parse_episode_number("E12").unwrap(), 12);
/// assert!(parse_episode_number("Extra").is_err());
/// ```
pub fn parse_episode_number(key: &str) -> Result<u32, CatalogError> {
    let rest = key.strip_prefix('E').unwrap_or(key);
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::new(CatalogErrorKind::InvalidKey(
            key.to_string(),
        )));
    }
    rest.parse::<u32>()
        .map_err(|_| CatalogError::new(CatalogErrorKind::InvalidKey(key.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_key_is_idempotent() {
        let once = normalize_series_key("  Breaking Bad ");
        assert_eq!(normalize_series_key(&once), once);
    }

    #[test]
    fn season_aliases_collapse_to_one_key() {
        for raw in ["1", "S1", "Season 1", "season 01", " s1 "] {
            assert_eq!(normalize_season_key(raw), "S1", "input {raw:?}");
        }
    }

    #[test]
    fn non_numeric_season_kept_verbatim() {
        assert_eq!(normalize_season_key("Specials"), "SPECIALS");
        assert_eq!(normalize_season_key("extras"), "SEXTRAS");
    }

    #[test]
    fn episode_key_round_trips() {
        for n in [1, 9, 10, 123] {
            assert_eq!(parse_episode_number(&normalize_episode_key(n)).unwrap(), n);
        }
    }

    #[test]
    fn bad_episode_keys_fail() {
        for key in ["E", "E1x", "EE1", "episode", "E-1", "E+1", ""] {
            assert!(parse_episode_number(key).is_err(), "key {key:?}");
        }
    }

    #[test]
    fn bare_number_parses_as_episode() {
        assert_eq!(parse_episode_number("7").unwrap(), 7);
    }
}
