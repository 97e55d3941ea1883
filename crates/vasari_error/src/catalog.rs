//! Catalog error types.

/// The hierarchy level at which a lookup failed.
///
/// Users get a distinct "not found" message per level so they know where the
/// path broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NotFoundLevel {
    /// No series document with the requested key
    #[display("series")]
    Series,
    /// Series exists but has no such season
    #[display("season")]
    Season,
    /// Season exists but has no such episode
    #[display("episode")]
    Episode,
    /// Episode exists but has no file at the requested quality
    #[display("quality")]
    Quality,
}

/// Kinds of catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// An episode key did not parse as `E<integer>`
    #[display("Invalid episode key: {}", _0)]
    InvalidKey(String),
    /// A bulk import document is missing required fields
    #[display("Invalid series document shape: {}", _0)]
    InvalidShape(String),
    /// A path component was absent at the given level
    #[display("Not found at {} level: {}", level, key)]
    NotFound {
        /// Hierarchy level at which the lookup failed
        level: NotFoundLevel,
        /// The key that was not found
        key: String,
    },
}

/// Catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::InvalidKey("EX".to_string()));
/// assert!(format!("{}", err).contains("Invalid episode key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new catalog error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a `NotFound` error for the given level and key.
    #[track_caller]
    pub fn not_found(level: NotFoundLevel, key: impl Into<String>) -> Self {
        Self::new(CatalogErrorKind::NotFound {
            level,
            key: key.into(),
        })
    }
}
