//! User-facing navigation: free-text series lookup, action token dispatch,
//! menu rendering, and file delivery.
//!
//! The navigation state machine is server-authoritative and stateless: every
//! button press re-derives its subtree from the current catalog snapshot, so
//! stale menus degrade into not-found messages instead of wrong deliveries.

use crate::engine::{CatalogBot, MSG_INVALID_ACTION};
use crate::{ActorId, ChatTransport, MenuButton, build_button_rows};
use tracing::instrument;
use vasari_core::{Action, FileLocator, SeriesDoc, normalize_series_key};
use vasari_error::{NotFoundLevel, VasariResult};
use vasari_storage::CatalogStore;

impl<S, T> CatalogBot<S, T>
where
    S: CatalogStore,
    T: ChatTransport,
{
    /// Handle a free-text message: treat it as a series name and render the
    /// season menu.
    ///
    /// Command-shaped text (leading `/`) and empty text are ignored; the
    /// transport routes commands to the dedicated handlers.
    #[instrument(skip(self, text), fields(actor = %actor))]
    pub async fn on_free_text(&self, actor: ActorId, text: &str) -> VasariResult<()> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('/') {
            return Ok(());
        }

        let series_key = normalize_series_key(text);
        let Some(doc) = self.load_series(actor, &series_key).await? else {
            return self.reply(actor, "Series not found.").await;
        };

        if doc.seasons.is_empty() {
            return self.reply(actor, "No seasons found for this series.").await;
        }

        let mut rows = vec![vec![MenuButton::new(
            "All Seasons",
            Action::AllSeasons {
                series: doc.series_key.clone(),
            }
            .encode(),
        )]];
        let season_buttons = doc
            .seasons
            .keys()
            .map(|season| {
                MenuButton::new(
                    season,
                    Action::Season {
                        series: doc.series_key.clone(),
                        season: season.clone(),
                    }
                    .encode(),
                )
            })
            .collect();
        rows.extend(build_button_rows(season_buttons, self.config.menu_row_size));

        self.transport
            .send_menu(
                actor,
                &format!("Select Season for {}:", doc.display_name),
                rows,
            )
            .await?;
        Ok(())
    }

    /// Handle a pressed choice: decode the token and render the next menu or
    /// deliver the selection.
    ///
    /// Malformed tokens fail closed with a user-visible message.
    #[instrument(skip(self, token), fields(actor = %actor))]
    pub async fn on_action_token(&self, actor: ActorId, token: &str) -> VasariResult<()> {
        let action = match Action::decode(token) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(error = %e, token = %token, "Rejected malformed action token");
                return self.reply(actor, MSG_INVALID_ACTION).await;
            }
        };

        let Some(doc) = self.load_series(actor, action.series()).await? else {
            return self
                .report_not_found(actor, NotFoundLevel::Series, action.series())
                .await;
        };

        match action {
            Action::Season { season, .. } => self.render_episode_menu(actor, &doc, &season).await,
            Action::Episode {
                season, episode, ..
            } => self.render_quality_menu(actor, &doc, &season, &episode).await,
            Action::Quality {
                season,
                episode,
                quality,
                ..
            } => {
                self.resolve_quality(actor, &doc, &season, &episode, &quality)
                    .await
            }
            Action::AllSeasons { .. } => self.render_series_quality_union(actor, &doc).await,
            Action::AllEpisodes { season, .. } => {
                self.render_season_quality_union(actor, &doc, &season).await
            }
            Action::AllSeasonsQuality { quality, .. } => {
                let matches: Vec<(String, &FileLocator)> = doc
                    .locators_for_quality(&quality)
                    .into_iter()
                    .map(|(season, episode, loc)| (format!("{season} {episode}"), loc))
                    .collect();
                self.deliver_batch(actor, matches, &quality).await
            }
            Action::AllQuality {
                season, quality, ..
            } => {
                let Some(season_doc) = doc.season(&season) else {
                    return self.report_not_found(actor, NotFoundLevel::Season, &season).await;
                };
                let matches: Vec<(String, &FileLocator)> = season_doc
                    .locators_for_quality(&quality)
                    .into_iter()
                    .map(|(episode, loc)| (episode.to_string(), loc))
                    .collect();
                self.deliver_batch(actor, matches, &quality).await
            }
        }
    }

    /// Episode menu for one season, with an "All Episodes" aggregate on top.
    async fn render_episode_menu(
        &self,
        actor: ActorId,
        doc: &SeriesDoc,
        season: &str,
    ) -> VasariResult<()> {
        let Some(season_doc) = doc.season(season) else {
            return self.report_not_found(actor, NotFoundLevel::Season, season).await;
        };
        if season_doc.episodes.is_empty() {
            return self
                .reply(actor, "No episodes found in this season.")
                .await;
        }

        let mut rows = vec![vec![MenuButton::new(
            "All Episodes",
            Action::AllEpisodes {
                series: doc.series_key.clone(),
                season: season.to_string(),
            }
            .encode(),
        )]];
        let episode_buttons = season_doc
            .episodes
            .keys()
            .map(|episode| {
                MenuButton::new(
                    episode,
                    Action::Episode {
                        series: doc.series_key.clone(),
                        season: season.to_string(),
                        episode: episode.clone(),
                    }
                    .encode(),
                )
            })
            .collect();
        rows.extend(build_button_rows(episode_buttons, self.config.menu_row_size));

        self.transport
            .send_menu(actor, &format!("Select Episode for {season}:"), rows)
            .await?;
        Ok(())
    }

    /// Quality menu for one episode, with a back button to the episode list.
    async fn render_quality_menu(
        &self,
        actor: ActorId,
        doc: &SeriesDoc,
        season: &str,
        episode: &str,
    ) -> VasariResult<()> {
        let Some(season_doc) = doc.season(season) else {
            return self.report_not_found(actor, NotFoundLevel::Season, season).await;
        };
        let Some(episode_doc) = season_doc.episode(episode) else {
            return self.report_not_found(actor, NotFoundLevel::Episode, episode).await;
        };
        if episode_doc.qualities.is_empty() {
            return self
                .reply(actor, "No qualities found for this episode.")
                .await;
        }

        let quality_buttons = episode_doc
            .qualities
            .keys()
            .map(|quality| {
                MenuButton::new(
                    quality,
                    Action::Quality {
                        series: doc.series_key.clone(),
                        season: season.to_string(),
                        episode: episode.to_string(),
                        quality: quality.clone(),
                    }
                    .encode(),
                )
            })
            .collect();
        let mut rows = build_button_rows(quality_buttons, self.config.menu_row_size);
        rows.push(vec![MenuButton::new(
            "⬅️ Back",
            Action::Season {
                series: doc.series_key.clone(),
                season: season.to_string(),
            }
            .encode(),
        )]);

        self.transport
            .send_menu(actor, &format!("Select Quality for {episode}:"), rows)
            .await?;
        Ok(())
    }

    /// Resolve one leaf: link out for URLs, deliver privately for references.
    async fn resolve_quality(
        &self,
        actor: ActorId,
        doc: &SeriesDoc,
        season: &str,
        episode: &str,
        quality: &str,
    ) -> VasariResult<()> {
        let Some(season_doc) = doc.season(season) else {
            return self.report_not_found(actor, NotFoundLevel::Season, season).await;
        };
        let Some(episode_doc) = season_doc.episode(episode) else {
            return self.report_not_found(actor, NotFoundLevel::Episode, episode).await;
        };
        let Some(locator) = episode_doc.quality(quality) else {
            return self.report_not_found(actor, NotFoundLevel::Quality, quality).await;
        };

        match locator {
            FileLocator::Url(url) => {
                self.transport
                    .send_link(
                        actor,
                        &format!("Download link for {episode} in {quality}:"),
                        &format!("Download {episode} in {quality}"),
                        url,
                    )
                    .await?;
            }
            FileLocator::Reference(reference) => {
                if let Err(e) = self
                    .transport
                    .deliver_file(actor, reference, self.config.file_caption.as_deref())
                    .await
                {
                    tracing::error!(error = %e, episode = %episode, quality = %quality, "File delivery failed");
                    return self
                        .reply(actor, "Failed to send the file. Please try again later.")
                        .await;
                }
                self.reply(
                    actor,
                    &format!("Sent {episode} in {quality} to your private chat."),
                )
                .await?;
            }
        }
        Ok(())
    }

    /// Quality-union menu across the whole series.
    async fn render_series_quality_union(
        &self,
        actor: ActorId,
        doc: &SeriesDoc,
    ) -> VasariResult<()> {
        let labels = doc.quality_labels();
        if labels.is_empty() {
            return self
                .reply(actor, "No qualities found for this series.")
                .await;
        }

        let buttons = labels
            .into_iter()
            .map(|quality| {
                let token = Action::AllSeasonsQuality {
                    series: doc.series_key.clone(),
                    quality: quality.clone(),
                }
                .encode();
                MenuButton::new(quality, token)
            })
            .collect();
        let rows = build_button_rows(buttons, self.config.menu_row_size);

        self.transport
            .send_menu(
                actor,
                &format!("Select Quality for {} (all seasons):", doc.display_name),
                rows,
            )
            .await?;
        Ok(())
    }

    /// Quality-union menu across one season.
    async fn render_season_quality_union(
        &self,
        actor: ActorId,
        doc: &SeriesDoc,
        season: &str,
    ) -> VasariResult<()> {
        let Some(season_doc) = doc.season(season) else {
            return self.report_not_found(actor, NotFoundLevel::Season, season).await;
        };
        let labels = season_doc.quality_labels();
        if labels.is_empty() {
            return self
                .reply(actor, "No qualities found in this season.")
                .await;
        }

        let buttons = labels
            .into_iter()
            .map(|quality| {
                let token = Action::AllQuality {
                    series: doc.series_key.clone(),
                    season: season.to_string(),
                    quality: quality.clone(),
                }
                .encode();
                MenuButton::new(quality, token)
            })
            .collect();
        let rows = build_button_rows(buttons, self.config.menu_row_size);

        self.transport
            .send_menu(
                actor,
                &format!("Select Quality for {season} (all episodes):"),
                rows,
            )
            .await?;
        Ok(())
    }

    /// Deliver every matching locator in order, counting per-item failures
    /// instead of aborting the batch, then report the tally.
    async fn deliver_batch(
        &self,
        actor: ActorId,
        matches: Vec<(String, &FileLocator)>,
        quality: &str,
    ) -> VasariResult<()> {
        if matches.is_empty() {
            return self
                .reply(actor, &format!("No episodes found in {quality}."))
                .await;
        }

        let total = matches.len();
        let mut sent = 0usize;
        for (label, locator) in matches {
            let result = match locator {
                FileLocator::Url(url) => {
                    self.transport
                        .send_link(
                            actor,
                            &format!("Download link for {label} in {quality}:"),
                            &format!("Download {label} in {quality}"),
                            url,
                        )
                        .await
                }
                FileLocator::Reference(reference) => {
                    let caption = self
                        .config
                        .file_caption
                        .clone()
                        .unwrap_or_else(|| format!("{label} {quality}"));
                    self.transport
                        .deliver_file(actor, reference, Some(&caption))
                        .await
                }
            };
            match result {
                Ok(()) => sent += 1,
                Err(e) => {
                    tracing::error!(error = %e, item = %label, quality = %quality, "Batch item delivery failed");
                }
            }
        }

        tracing::info!(sent, total, quality = %quality, "Batch delivery finished");
        self.reply(actor, &format!("Sent {sent} of {total} files for {quality}."))
            .await
    }
}
