//! Chat-facing engine for the Vasari media catalog.
//!
//! Administrators register video files under a series → season → episode →
//! quality hierarchy; everyone else browses it through interactive menus and
//! receives the selected file. The chat platform itself is an external
//! collaborator: it implements [`ChatTransport`], routes its own message
//! parsing, and calls the [`CatalogBot`] handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use vasari_bot::{ActorId, BotConfig, CatalogBot};
//! use vasari_storage::FileCatalog;
//!
//! let store = FileCatalog::new("/var/vasari/catalog")?;
//! let bot = CatalogBot::new(store, transport, BotConfig::with_admins(vec![42]));
//!
//! // Wired up by the transport layer:
//! bot.set_context(ActorId(42), "Breaking Bad|S1|720p").await?;
//! bot.on_file_upload(ActorId(42), "file-ref-abc", None).await?;
//! bot.on_free_text(ActorId(7), "breaking bad").await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod config;
mod engine;
mod navigation;
mod session;
mod telemetry;
mod transport;

pub use config::BotConfig;
pub use engine::CatalogBot;
pub use session::{SessionRegistry, UploadSession};
pub use telemetry::init_telemetry;
pub use transport::{ActorId, ChatTransport, MenuButton, build_button_rows};
