//! Backing store error types.

/// Kinds of store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Failed to create the catalog directory
    #[display("Failed to create catalog directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a series document
    #[display("Failed to write series document: {}", _0)]
    DocumentWrite(String),
    /// Failed to read a series document
    #[display("Failed to read series document: {}", _0)]
    DocumentRead(String),
    /// Failed to serialize or deserialize a series document
    #[display("Series document serialization failed: {}", _0)]
    Serialization(String),
    /// A store operation exceeded its bounded timeout
    #[display("Store operation timed out after {}ms", _0)]
    Timeout(u64),
}

/// Store error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Timeout(5000));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
