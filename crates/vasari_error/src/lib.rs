//! Error types for the Vasari media catalog.
//!
//! This crate provides the foundation error types used throughout the Vasari
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vasari_error::{VasariResult, StoreError, StoreErrorKind};
//!
//! fn read_catalog() -> VasariResult<String> {
//!     Err(StoreError::new(StoreErrorKind::Timeout(5000)))?
//! }
//!
//! match read_catalog() {
//!     Ok(doc) => println!("Got: {}", doc),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod session;
mod store;
mod token;
mod transport;

pub use catalog::{CatalogError, CatalogErrorKind, NotFoundLevel};
pub use config::ConfigError;
pub use error::{VasariError, VasariErrorKind, VasariResult};
pub use session::{SessionError, SessionErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use token::{TokenError, TokenErrorKind};
pub use transport::{TransportError, TransportErrorKind};
