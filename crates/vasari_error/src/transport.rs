//! Chat transport error types.

/// Kinds of transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransportErrorKind {
    /// The transport could not deliver a file to the actor
    #[display("File delivery failed: {}", _0)]
    DeliveryFailed(String),
    /// The transport could not send a message or menu
    #[display("Send failed: {}", _0)]
    SendFailed(String),
}

/// Transport error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::DeliveryFailed("blocked".to_string()));
/// assert!(format!("{}", err).contains("delivery failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
