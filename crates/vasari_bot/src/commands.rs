//! Admin command handlers: upload context, quality switch, file intake, and
//! bulk import.
//!
//! Argument strings arrive pre-stripped of the command word itself; the
//! transport layer owns message parsing, this module owns the
//! pipe-separated argument conventions (`series_name|season|quality`).

use crate::engine::{CatalogBot, MSG_RETRY_LATER};
use crate::{ActorId, ChatTransport, UploadSession};
use tracing::instrument;
use vasari_core::{
    FileLocator, SeriesDoc, next_episode_number, normalize_episode_key, normalize_season_key,
    normalize_series_key,
};
use vasari_error::{SessionError, SessionErrorKind, VasariResult};
use vasari_storage::CatalogStore;

const USAGE_ADD: &str = "Use format: /add series_name|season|quality";
const USAGE_QUALITY: &str = "Use format: /n series_name|quality or /n quality";

impl<S, T> CatalogBot<S, T>
where
    S: CatalogStore,
    T: ChatTransport,
{
    /// Set the upload context (`/add series_name|season|quality`).
    ///
    /// Replaces any previous session for this actor wholesale. The episode
    /// cursor starts at the next free number in the target season, read from
    /// a snapshot.
    #[instrument(skip(self, args), fields(actor = %actor))]
    pub async fn set_context(&self, actor: ActorId, args: &str) -> VasariResult<()> {
        if !self
            .require_admin(actor, "You are not authorized to add series.")
            .await?
        {
            return Ok(());
        }

        let parts: Vec<&str> = args.split('|').map(str::trim).collect();
        let &[name, season, quality] = parts.as_slice() else {
            return self.reject_invalid_format(actor, USAGE_ADD).await;
        };
        if name.is_empty() || season.is_empty() || quality.is_empty() {
            return self.reject_invalid_format(actor, USAGE_ADD).await;
        }

        let series_key = normalize_series_key(name);
        let season_key = normalize_season_key(season);
        let doc = self.load_series(actor, &series_key).await?;
        let cursor = next_episode_number(doc.as_ref(), &season_key);

        self.sessions.replace(
            actor,
            UploadSession {
                series_display: name.to_string(),
                series_key,
                season: season_key.clone(),
                quality: quality.to_string(),
                cursor,
            },
        );

        tracing::info!(actor = %actor, season = %season_key, quality = %quality, cursor, "Upload context set");
        self.reply(
            actor,
            &format!(
                "Context set to {name} - {season_key} - {quality}. \
                 Upload files now. Episode will auto-increment from E{cursor}."
            ),
        )
        .await
    }

    /// Switch the quality track (`/n series_name|quality` or `/n quality`).
    ///
    /// Keeps the season from the current session and always restarts the
    /// episode counter at 1: each quality track numbers independently.
    #[instrument(skip(self, args), fields(actor = %actor))]
    pub async fn set_quality(&self, actor: ActorId, args: &str) -> VasariResult<()> {
        if !self.require_admin(actor, "You are not authorized.").await? {
            return Ok(());
        }

        let parts: Vec<&str> = args.split('|').map(str::trim).collect();
        let (name, quality) = match parts.as_slice() {
            &[name, quality] if !name.is_empty() && !quality.is_empty() => (Some(name), quality),
            &[quality] if !quality.is_empty() => (None, quality),
            _ => return self.reject_invalid_format(actor, USAGE_QUALITY).await,
        };

        let Some(current) = self.sessions.snapshot(actor) else {
            return self
                .reply(
                    actor,
                    "No upload context set. Use /add first with series_name|season|quality",
                )
                .await;
        };

        let (series_display, series_key) = match name {
            Some(name) => (name.to_string(), normalize_series_key(name)),
            None => (current.series_display, current.series_key),
        };

        self.sessions.replace(
            actor,
            UploadSession {
                series_display,
                series_key: series_key.clone(),
                season: current.season,
                quality: quality.to_string(),
                cursor: 1,
            },
        );

        tracing::info!(actor = %actor, series = %series_key, quality = %quality, "Quality track switched");
        self.reply(
            actor,
            &format!(
                "Quality changed to {quality} for series {series_key}. \
                 Episode counter reset to 1. Upload files now."
            ),
        )
        .await
    }

    /// File an uploaded locator under the actor's current context.
    ///
    /// The cursor advances only when this write created a new episode; a
    /// second quality for an existing episode leaves it in place so the next
    /// file for a different quality does not skip numbers.
    #[instrument(skip(self, raw_locator, _caption), fields(actor = %actor))]
    pub async fn on_file_upload(
        &self,
        actor: ActorId,
        raw_locator: &str,
        _caption: Option<&str>,
    ) -> VasariResult<()> {
        if !self
            .require_admin(actor, "You are not authorized to upload files.")
            .await?
        {
            return Ok(());
        }

        let Some(session) = self.sessions.snapshot(actor) else {
            let err = SessionError::new(SessionErrorKind::NoActiveTarget(actor.0));
            tracing::debug!(error = %err, "File received with no active upload target");
            return self
                .reply(
                    actor,
                    "Use /add to set series, season, and quality before uploading files.",
                )
                .await;
        };

        let episode_key = normalize_episode_key(session.cursor);
        let locator = FileLocator::from_raw(raw_locator);

        let outcome = match self
            .store
            .attach_file(
                &session.series_display,
                &session.season,
                &episode_key,
                &session.quality,
                locator,
            )
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, series = %session.series_key, "Catalog store write failed");
                self.reply(actor, MSG_RETRY_LATER).await.ok();
                return Err(e);
            }
        };

        if !outcome.episode_existed() {
            self.sessions.update(actor, |s| s.cursor += 1);
        }

        self.reply(
            actor,
            &format!(
                "Saved: Series {}, Season {}, Episode {episode_key}, Quality {}.",
                session.series_display, session.season, session.quality
            ),
        )
        .await
    }

    /// Bulk-import a whole series document (admin only).
    ///
    /// Accepts the persisted shape and replaces the named series wholesale;
    /// unlike a point attach, episodes absent from the new document are gone
    /// afterwards.
    #[instrument(skip(self, json), fields(actor = %actor))]
    pub async fn import_series(&self, actor: ActorId, json: &str) -> VasariResult<()> {
        if !self
            .require_admin(actor, "You are not authorized to import series.")
            .await?
        {
            return Ok(());
        }

        let value: serde_json::Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Import rejected: not valid JSON");
                return self.reply(actor, "Invalid import: not valid JSON.").await;
            }
        };

        let doc = match SeriesDoc::from_import(value) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!(error = %e, "Import rejected: bad shape");
                return self
                    .reply(
                        actor,
                        "Invalid import: expected { seriesKey, displayName, seasons: ... }.",
                    )
                    .await;
            }
        };

        let series_key = doc.series_key.clone();
        let display = doc.display_name.clone();
        let season_count = doc.seasons.len();

        if let Err(e) = self.store.import_series(doc).await {
            tracing::warn!(error = %e, series = %series_key, "Series import failed");
            self.reply(actor, MSG_RETRY_LATER).await.ok();
            return Err(e);
        }

        tracing::info!(series = %series_key, season_count, "Series imported");
        self.reply(
            actor,
            &format!("Imported {display} with {season_count} season(s)."),
        )
        .await
    }
}
