//! Action token codec.
//!
//! Every interactive choice carries a flat `kind|series|...` token. The
//! server holds no conversation state for browsing; each press is decoded
//! against the current catalog. Decode validates the kind and the exact
//! segment count, so a malformed token is a first-class error instead of an
//! index-out-of-range panic.

use vasari_error::{TokenError, TokenErrorKind};

const DELIMITER: char = '|';

/// A decoded navigation action.
///
/// # Examples
///
/// ```
/// use vasari_core::Action;
///
/// let action = Action::Season {
///     series: "breaking bad".to_string(),
///     season: "S1".to_string(),
/// };
/// let token = action.encode();
/// assert_eq!(token, "season|breaking bad|S1");
/// assert_eq!(Action::decode(&token).unwrap(), action);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the episode menu for one season.
    Season {
        /// Canonical series key
        series: String,
        /// Canonical season key
        season: String,
    },
    /// Show the quality menu for one episode.
    Episode {
        /// Canonical series key
        series: String,
        /// Canonical season key
        season: String,
        /// Canonical episode key
        episode: String,
    },
    /// Resolve one leaf locator: link or private delivery.
    Quality {
        /// Canonical series key
        series: String,
        /// Canonical season key
        season: String,
        /// Canonical episode key
        episode: String,
        /// Quality label
        quality: String,
    },
    /// Show the series-wide quality union menu.
    AllSeasons {
        /// Canonical series key
        series: String,
    },
    /// Deliver every matching locator across the whole series.
    AllSeasonsQuality {
        /// Canonical series key
        series: String,
        /// Quality label
        quality: String,
    },
    /// Show the season-wide quality union menu.
    AllEpisodes {
        /// Canonical series key
        series: String,
        /// Canonical season key
        season: String,
    },
    /// Deliver every matching locator within one season.
    AllQuality {
        /// Canonical series key
        series: String,
        /// Canonical season key
        season: String,
        /// Quality label
        quality: String,
    },
}

impl Action {
    /// The wire kind segment for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Season { .. } => "season",
            Self::Episode { .. } => "episode",
            Self::Quality { .. } => "quality",
            Self::AllSeasons { .. } => "all_seasons",
            Self::AllSeasonsQuality { .. } => "all_seasons_quality",
            Self::AllEpisodes { .. } => "all_episodes",
            Self::AllQuality { .. } => "all_quality",
        }
    }

    /// The canonical series key every action carries.
    pub fn series(&self) -> &str {
        match self {
            Self::Season { series, .. }
            | Self::Episode { series, .. }
            | Self::Quality { series, .. }
            | Self::AllSeasons { series }
            | Self::AllSeasonsQuality { series, .. }
            | Self::AllEpisodes { series, .. }
            | Self::AllQuality { series, .. } => series,
        }
    }

    /// Serialize into the flat delimiter-joined token.
    pub fn encode(&self) -> String {
        let segments: Vec<&str> = match self {
            Self::Season { series, season } => vec![self.kind(), series, season],
            Self::Episode {
                series,
                season,
                episode,
            } => vec![self.kind(), series, season, episode],
            Self::Quality {
                series,
                season,
                episode,
                quality,
            } => vec![self.kind(), series, season, episode, quality],
            Self::AllSeasons { series } => vec![self.kind(), series],
            Self::AllSeasonsQuality { series, quality } => vec![self.kind(), series, quality],
            Self::AllEpisodes { series, season } => vec![self.kind(), series, season],
            Self::AllQuality {
                series,
                season,
                quality,
            } => vec![self.kind(), series, season, quality],
        };
        segments.join(&DELIMITER.to_string())
    }

    /// Deserialize a token, validating kind and arity.
    ///
    /// # Errors
    ///
    /// Returns `Empty`, `UnknownKind`, or `WrongArity` for malformed tokens.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        if token.is_empty() {
            return Err(TokenError::new(TokenErrorKind::Empty));
        }
        let parts: Vec<&str> = token.split(DELIMITER).collect();
        let kind = parts[0];

        let expected = match kind {
            "season" | "all_seasons_quality" | "all_episodes" => 3,
            "episode" | "all_quality" => 4,
            "quality" => 5,
            "all_seasons" => 2,
            _ => {
                return Err(TokenError::new(TokenErrorKind::UnknownKind(
                    kind.to_string(),
                )));
            }
        };
        if parts.len() != expected {
            return Err(TokenError::new(TokenErrorKind::WrongArity {
                kind: kind.to_string(),
                expected,
                got: parts.len(),
            }));
        }

        let action = match kind {
            "season" => Self::Season {
                series: parts[1].to_string(),
                season: parts[2].to_string(),
            },
            "episode" => Self::Episode {
                series: parts[1].to_string(),
                season: parts[2].to_string(),
                episode: parts[3].to_string(),
            },
            "quality" => Self::Quality {
                series: parts[1].to_string(),
                season: parts[2].to_string(),
                episode: parts[3].to_string(),
                quality: parts[4].to_string(),
            },
            "all_seasons" => Self::AllSeasons {
                series: parts[1].to_string(),
            },
            "all_seasons_quality" => Self::AllSeasonsQuality {
                series: parts[1].to_string(),
                quality: parts[2].to_string(),
            },
            "all_episodes" => Self::AllEpisodes {
                series: parts[1].to_string(),
                season: parts[2].to_string(),
            },
            "all_quality" => Self::AllQuality {
                series: parts[1].to_string(),
                season: parts[2].to_string(),
                quality: parts[3].to_string(),
            },
            _ => unreachable!("kind validated above"),
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<Action> {
        let series = "breaking bad".to_string();
        let season = "S1".to_string();
        let episode = "E1".to_string();
        let quality = "720p".to_string();
        vec![
            Action::Season {
                series: series.clone(),
                season: season.clone(),
            },
            Action::Episode {
                series: series.clone(),
                season: season.clone(),
                episode: episode.clone(),
            },
            Action::Quality {
                series: series.clone(),
                season: season.clone(),
                episode: episode.clone(),
                quality: quality.clone(),
            },
            Action::AllSeasons {
                series: series.clone(),
            },
            Action::AllSeasonsQuality {
                series: series.clone(),
                quality: quality.clone(),
            },
            Action::AllEpisodes {
                series: series.clone(),
                season: season.clone(),
            },
            Action::AllQuality {
                series,
                season,
                quality,
            },
        ]
    }

    #[test]
    fn every_kind_round_trips() {
        for action in all_variants() {
            let token = action.encode();
            assert_eq!(Action::decode(&token).unwrap(), action, "token {token:?}");
        }
    }

    #[test]
    fn empty_token_fails_closed() {
        assert!(Action::decode("").is_err());
    }

    #[test]
    fn unknown_kind_fails_closed() {
        assert!(Action::decode("reboot|series").is_err());
    }

    #[test]
    fn wrong_arity_fails_closed() {
        assert!(Action::decode("season|only-series").is_err());
        assert!(Action::decode("quality|s|S1|E1").is_err());
        assert!(Action::decode("all_seasons|s|extra").is_err());
    }
}
