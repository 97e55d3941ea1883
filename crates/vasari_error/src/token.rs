//! Action token decode error types.

/// Kinds of token errors.
///
/// Malformed tokens must fail closed with a user-visible "invalid action"
/// response, never an index-out-of-range panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TokenErrorKind {
    /// The token was empty
    #[display("Empty action token")]
    Empty,
    /// The kind segment was not a recognized action
    #[display("Unknown action kind: {}", _0)]
    UnknownKind(String),
    /// The token had the wrong number of segments for its kind
    #[display("Action '{}' expects {} segments, got {}", kind, expected, got)]
    WrongArity {
        /// The action kind segment
        kind: String,
        /// Segments required by that kind
        expected: usize,
        /// Segments actually present
        got: usize,
    },
}

/// Token error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{TokenError, TokenErrorKind};
///
/// let err = TokenError::new(TokenErrorKind::UnknownKind("reboot".to_string()));
/// assert!(format!("{}", err).contains("Unknown action kind"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Token Error: {} at line {} in {}", kind, line, file)]
pub struct TokenError {
    /// The kind of error that occurred
    pub kind: TokenErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TokenError {
    /// Create a new token error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TokenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
