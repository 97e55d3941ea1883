//! Admin upload session error types.

/// Kinds of session errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// The actor is not in the admin list
    #[display("Actor {} is not privileged", _0)]
    NotPrivileged(i64),
    /// Command arguments did not match the expected format
    #[display("Invalid command format, expected: {}", _0)]
    InvalidFormat(String),
    /// A file arrived with no upload target set
    #[display("No active upload target for actor {}", _0)]
    NoActiveTarget(i64),
}

/// Session error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::NoActiveTarget(42));
/// assert!(format!("{}", err).contains("No active upload target"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The kind of error that occurred
    pub kind: SessionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SessionError {
    /// Create a new session error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
