//! Bot configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vasari_error::{ConfigError, VasariResult};

fn default_row_size() -> usize {
    3
}

/// Configuration for the catalog bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Actor ids granted admin rights regardless of what the transport
    /// reports for them
    pub admins: Vec<i64>,
    /// Optional caption attached to every delivered file
    #[serde(default)]
    pub file_caption: Option<String>,
    /// Buttons per menu row (aggregate buttons get a full-width row)
    #[serde(default = "default_row_size")]
    pub menu_row_size: usize,
}

impl BotConfig {
    /// A config with the given admin list and defaults for the rest.
    pub fn with_admins(admins: Vec<i64>) -> Self {
        Self {
            admins,
            file_caption: None,
            menu_row_size: default_row_size(),
        }
    }

    /// Load bot configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> VasariResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")).into())
    }

    /// Whether an actor id is in the admin list.
    pub fn is_admin(&self, actor: i64) -> bool {
        self.admins.contains(&actor)
    }
}
