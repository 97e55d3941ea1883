//! Core data types for the Vasari media catalog.
//!
//! This crate provides the catalog document tree (series → season → episode →
//! quality), the canonical key normalizers, the episode sequencer, and the
//! action token codec. Everything here is pure: no IO, no locking, no
//! transport. The storage and bot crates build on these types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod keys;
mod locator;
mod sequencer;
mod series;
mod token;

pub use keys::{
    normalize_episode_key, normalize_season_key, normalize_series_key, parse_episode_number,
};
pub use locator::FileLocator;
pub use sequencer::next_episode_number;
pub use series::{Episode, Season, SeriesDoc};
pub use token::Action;
