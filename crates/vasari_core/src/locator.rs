//! File locator variant.

use serde::{Deserialize, Serialize};

/// Where the deliverable media for one (episode, quality) leaf lives.
///
/// The variant is decided once at write time by a scheme-prefix sniff, rather
/// than re-sniffed on every read. On disk a locator is a bare string (the
/// original document shape), so serde round-trips through `String`.
///
/// # Examples
///
/// ```
/// use vasari_core::FileLocator;
///
/// let url = FileLocator::from_raw("https://example.com/f");
/// assert!(matches!(url, FileLocator::Url(_)));
///
/// let reference = FileLocator::from_raw("BAADBAADrwADBREAAYag");
/// assert!(matches!(reference, FileLocator::Reference(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub enum FileLocator {
    /// Opaque reference to binary content held by the transport layer.
    /// The catalog stores only the reference, never the bytes.
    #[display("{}", _0)]
    Reference(String),
    /// External URL; rendered as a link, never transferred as a file.
    #[display("{}", _0)]
    Url(String),
}

impl FileLocator {
    /// Classify a raw locator string.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw)
        } else {
            Self::Reference(raw)
        }
    }

    /// The underlying locator string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reference(s) | Self::Url(s) => s,
        }
    }

    /// Whether this locator is an external URL.
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl From<String> for FileLocator {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

impl From<FileLocator> for String {
    fn from(locator: FileLocator) -> Self {
        match locator {
            FileLocator::Reference(s) | FileLocator::Url(s) => s,
        }
    }
}
