//! The catalog bot engine.
//!
//! Holds the store, the transport, the config, and the per-admin upload
//! sessions. Admin command handlers live in `commands`, browsing handlers in
//! `navigation`; everything here is shared plumbing.

use crate::{ActorId, BotConfig, ChatTransport, SessionRegistry};
use vasari_core::SeriesDoc;
use vasari_error::{CatalogError, NotFoundLevel, SessionError, SessionErrorKind, VasariResult};
use vasari_storage::CatalogStore;

pub(crate) const MSG_RETRY_LATER: &str =
    "The catalog is temporarily unavailable. Please try again later.";
pub(crate) const MSG_INVALID_ACTION: &str = "Invalid action.";

/// The chat-facing catalog engine.
///
/// Every inbound chat event maps to one handler call; handlers are
/// independent and may run concurrently, so the engine keeps no state of its
/// own beyond the upload sessions and treats the store as the source of
/// truth.
///
/// Nothing in here is fatal: a failed interaction reports to the user where
/// it can, logs at the boundary, and leaves every other interaction alone.
pub struct CatalogBot<S, T> {
    pub(crate) store: S,
    pub(crate) transport: T,
    pub(crate) config: BotConfig,
    pub(crate) sessions: SessionRegistry,
}

impl<S, T> CatalogBot<S, T>
where
    S: CatalogStore,
    T: ChatTransport,
{
    /// Create an engine over a store and a transport.
    pub fn new(store: S, transport: T, config: BotConfig) -> Self {
        Self {
            store,
            transport,
            config,
            sessions: SessionRegistry::new(),
        }
    }

    /// Send the welcome/usage text (the `/start` command).
    pub async fn welcome(&self, actor: ActorId) -> VasariResult<()> {
        self.reply(
            actor,
            "Welcome to the series catalog!\n\n\
             Admins: use /add series_name|season|quality to set the upload context,\n\
             /n [series_name|]quality to switch quality and restart episode numbering,\n\
             then upload files.\n\
             Everyone else: send a series name to browse.",
        )
        .await
    }

    /// Best-effort text reply.
    pub(crate) async fn reply(&self, actor: ActorId, text: &str) -> VasariResult<()> {
        self.transport.send_message(actor, text).await?;
        Ok(())
    }

    /// Gate an admin operation. Sends `denial` and returns false for
    /// unprivileged actors.
    ///
    /// Privilege is the union of the configured admin list and whatever the
    /// transport vouches for on its own platform.
    pub(crate) async fn require_admin(&self, actor: ActorId, denial: &str) -> VasariResult<bool> {
        if self.config.is_admin(actor.0) || self.transport.is_privileged(actor) {
            return Ok(true);
        }
        let err = SessionError::new(SessionErrorKind::NotPrivileged(actor.0));
        tracing::warn!(error = %err, "Rejected admin operation");
        self.reply(actor, denial).await?;
        Ok(false)
    }

    /// Reject a malformed admin command and reprompt its usage line.
    pub(crate) async fn reject_invalid_format(
        &self,
        actor: ActorId,
        usage: &str,
    ) -> VasariResult<()> {
        let err = SessionError::new(SessionErrorKind::InvalidFormat(usage.to_string()));
        tracing::debug!(actor = %actor, error = %err, "Rejected malformed command arguments");
        self.reply(actor, usage).await
    }

    /// Answer a navigation request whose path broke at `level`.
    ///
    /// Stale menus land here; the not-found message tells the user which
    /// component of the path is gone.
    pub(crate) async fn report_not_found(
        &self,
        actor: ActorId,
        level: NotFoundLevel,
        key: &str,
    ) -> VasariResult<()> {
        let err = CatalogError::not_found(level, key);
        tracing::debug!(actor = %actor, error = %err, "Navigation path broke");
        let message = match level {
            NotFoundLevel::Series => "Series data not found.",
            NotFoundLevel::Season => "Season not found.",
            NotFoundLevel::Episode => "Episode not found.",
            NotFoundLevel::Quality => "File not found for selected quality.",
        };
        self.reply(actor, message).await
    }

    /// Snapshot read of a series, reporting store trouble to the user.
    ///
    /// `Ok(None)` means the series genuinely is not there; a store failure is
    /// logged, answered with a retry-later message, and propagated so the
    /// handler aborts this one interaction.
    pub(crate) async fn load_series(
        &self,
        actor: ActorId,
        series_key: &str,
    ) -> VasariResult<Option<SeriesDoc>> {
        match self.store.get_series(series_key).await {
            Ok(doc) => Ok(doc),
            Err(e) => {
                tracing::warn!(error = %e, series = %series_key, "Catalog store read failed");
                self.reply(actor, MSG_RETRY_LATER).await.ok();
                Err(e)
            }
        }
    }
}
