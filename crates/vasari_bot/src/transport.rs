//! The chat transport seam.
//!
//! The engine never talks to a wire protocol. Whatever chat platform embeds
//! it (Telegram, Discord, a test harness) implements [`ChatTransport`] and
//! the engine drives it with menus, links, and file deliveries.

use vasari_error::TransportError;

/// Opaque chat actor identity supplied by the transport layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
)]
pub struct ActorId(pub i64);

/// One interactive choice: a label the user sees and the action token sent
/// back when they press it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    /// User-visible label
    pub label: String,
    /// Encoded action token carried on the choice
    pub token: String,
}

impl MenuButton {
    /// Create a button.
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Split buttons into rows of at most `row_size`.
pub fn build_button_rows(buttons: Vec<MenuButton>, row_size: usize) -> Vec<Vec<MenuButton>> {
    let row_size = row_size.max(1);
    let mut rows = Vec::with_capacity(buttons.len().div_ceil(row_size));
    let mut iter = buttons.into_iter().peekable();
    while iter.peek().is_some() {
        rows.push(iter.by_ref().take(row_size).collect());
    }
    rows
}

/// Capabilities the engine consumes from the chat platform.
///
/// Implementations handle rendering and wire details; the engine decides
/// content and ordering. `deliver_file` failures are per-interaction (or
/// per-item in bulk delivery), never fatal to the engine.
#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a plain text message to an actor.
    async fn send_message(&self, actor: ActorId, text: &str) -> Result<(), TransportError>;

    /// Send a prompt with rows of interactive choices.
    async fn send_menu(
        &self,
        actor: ActorId,
        prompt: &str,
        rows: Vec<Vec<MenuButton>>,
    ) -> Result<(), TransportError>;

    /// Send a single link button (no file transfer).
    async fn send_link(
        &self,
        actor: ActorId,
        prompt: &str,
        label: &str,
        url: &str,
    ) -> Result<(), TransportError>;

    /// Deliver transport-held binary content to the actor privately.
    ///
    /// `reference` is the opaque content reference the catalog stored at
    /// upload time.
    async fn deliver_file(
        &self,
        actor: ActorId,
        reference: &str,
        caption: Option<&str>,
    ) -> Result<(), TransportError>;

    /// Whether the actor may run admin commands.
    fn is_privileged(&self, actor: ActorId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(n: usize) -> MenuButton {
        MenuButton::new(format!("B{n}"), format!("t|{n}"))
    }

    #[test]
    fn rows_chunk_evenly() {
        let rows = build_button_rows((0..7).map(button).collect(), 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[2].len(), 1);
    }

    #[test]
    fn zero_row_size_does_not_loop() {
        let rows = build_button_rows(vec![button(0)], 0);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn empty_buttons_yield_no_rows() {
        assert!(build_button_rows(Vec::new(), 3).is_empty());
    }
}
