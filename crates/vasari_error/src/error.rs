//! Top-level error wrapper types.

use crate::{CatalogError, ConfigError, SessionError, StoreError, TokenError, TransportError};

/// This is the foundation error enum. Every fallible seam in the workspace
/// converges here via `From`.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariError, StoreError, StoreErrorKind};
///
/// let store_err = StoreError::new(StoreErrorKind::Timeout(5000));
/// let err: VasariError = store_err.into();
/// assert!(format!("{}", err).contains("Store Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VasariErrorKind {
    /// Catalog model error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Backing store error
    #[from(StoreError)]
    Store(StoreError),
    /// Admin upload session error
    #[from(SessionError)]
    Session(SessionError),
    /// Action token decode error
    #[from(TokenError)]
    Token(TokenError),
    /// Chat transport error
    #[from(TransportError)]
    Transport(TransportError),
}

/// Vasari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariResult, SessionError, SessionErrorKind};
///
/// fn might_fail() -> VasariResult<()> {
///     Err(SessionError::new(SessionErrorKind::NoActiveTarget(7)))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vasari Error: {}", _0)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariResult, TokenError, TokenErrorKind};
///
/// fn decode() -> VasariResult<()> {
///     Err(TokenError::new(TokenErrorKind::Empty))?
/// }
/// ```
pub type VasariResult<T> = std::result::Result<T, VasariError>;
