//! Bot metadata loading and normalization.
//!
//! Each bot is described by a small JSON document:
//!
//! ```json
//! {
//!     "name": "chatbot",
//!     "command_prefix": "!",
//!     "token_env": "CHATBOT_TOKEN",
//!     "intents": ["presence", "members"]
//! }
//! ```
//!
//! `name` and `token_env` are required. `command_prefix` defaults to
//! [`UNLIKELY_PREFIX`] and `intents` defaults to an empty set. The token itself
//! never appears in metadata, only the name of the variable holding it.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::UNLIKELY_PREFIX;
use crate::error::config::ConfigError;

/// Validated, normalized description of one bot.
///
/// Constructed once at process start and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMetadata {
    /// Identifies the bot in logs and shutdown notices.
    pub name: String,
    /// Leading string marking a message as a command for this bot.
    pub command_prefix: String,
    /// Name of the environment variable holding the Discord token.
    pub token_env: String,
    /// Requested privileged intents, as written in the metadata file.
    pub intents: BTreeSet<String>,
}

/// Metadata as it appears on disk, before defaults and validation.
#[derive(Deserialize)]
struct RawBotMetadata {
    name: Option<String>,
    command_prefix: Option<String>,
    token_env: Option<String>,
    intents: Option<Vec<String>>,
}

impl BotMetadata {
    /// Reads and validates bot metadata from a JSON file.
    ///
    /// # Arguments
    /// - `path` - Path to the metadata file
    ///
    /// # Returns
    /// - `Ok(BotMetadata)` - Parsed metadata with defaults applied
    /// - `Err(ConfigError::ReadMetadata)` - File missing or unreadable
    /// - `Err(ConfigError::ParseMetadata)` - File is not valid metadata JSON
    /// - `Err(ConfigError::MissingField)` - `name` or `token_env` absent or empty
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadMetadata {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    /// Parses metadata from a JSON string.
    ///
    /// Applies the same defaults and validation as [`BotMetadata::load`].
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let parse_error = |source| ConfigError::ParseMetadata {
            path: path.to_path_buf(),
            source,
        };

        // Going through a map first keeps serde from filling fields by position
        // when the document is an array.
        let fields: Map<String, Value> = serde_json::from_str(contents).map_err(parse_error)?;
        let raw: RawBotMetadata =
            serde_json::from_value(Value::Object(fields)).map_err(parse_error)?;

        let name = required(raw.name, "name")?;
        let token_env = required(raw.token_env, "token_env")?;

        Ok(Self {
            name,
            command_prefix: raw
                .command_prefix
                .unwrap_or_else(|| UNLIKELY_PREFIX.to_string()),
            token_env,
            intents: raw.intents.unwrap_or_default().into_iter().collect(),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingField(field)),
    }
}
