use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;

/// Command prefix used when a bot's metadata does not declare one.
///
/// Built from Unicode private-use code points, which no keyboard layout produces,
/// so prefix-based dispatch never fires for ordinary user text.
pub const UNLIKELY_PREFIX: &str = "\u{E000}\u{F8FF}marsbots\u{F8FF}\u{E000}";

/// Default root under which each bot gets its own log directory.
pub const LOG_DIR: &str = "logs";

/// Default directory holding one sub-directory per bot.
pub const BOTS_DIR: &str = "bots";

/// File name of the per-bot log within its log directory.
pub const LOG_FILE_NAME: &str = "discord.log";

const CRASH_WEBHOOK_URL: &str = "CRASH_WEBHOOK_URL";
const LOG_DIR_VAR: &str = "MARSBOTS_LOG_DIR";

pub struct Config {
    /// Webhook receiving a notice when the bot shuts down, if configured.
    pub crash_webhook_url: Option<String>,
    /// Root directory for per-bot log files.
    pub log_root: PathBuf,
}

impl Config {
    /// Reads process configuration from the environment.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_env() -> Self {
        Self {
            crash_webhook_url: non_blank_var(CRASH_WEBHOOK_URL),
            log_root: non_blank_var(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(LOG_DIR)),
        }
    }
}

/// Loads a `.env` file into the process environment.
///
/// A missing file is not an error; bots without a `.env` rely on variables
/// already present in the environment. Existing variables are not overridden.
pub fn load_dotenv(path: &Path) -> Result<(), ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ConfigError::Dotenv {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
