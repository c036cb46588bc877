//! Per-bot file logging.
//!
//! Each bot writes to `<log_root>/<name>/discord.log`. The file is truncated on
//! every start so it only ever holds the current run; the process manager keeps
//! stdout history separately.
//!
//! The subscriber built here is owned by the bot rather than installed as a side
//! effect, so several bots can log to separate files inside one process (as in
//! tests). Only the process entry point installs it globally.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::time::ChronoLocal;

use crate::config::LOG_FILE_NAME;
use crate::error::config::ConfigError;

/// Timestamp layout for log lines, e.g. `Tue, 14 Oct 2025 18:02:11`.
const TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Where and how verbosely a bot logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: Level,
}

impl LogConfig {
    pub fn new(path: impl Into<PathBuf>, level: Level) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// Log destination for a bot under the given root, at INFO.
    pub fn for_bot(log_root: &Path, name: &str) -> Self {
        Self::new(log_root.join(name).join(LOG_FILE_NAME), Level::INFO)
    }

    /// Creates the log directory and truncates the log file.
    ///
    /// # Returns
    /// - `Ok(BotLogger)` - Logger writing exclusively to the configured file
    /// - `Err(ConfigError::LogDestination)` - Directory or file could not be created
    pub fn open(&self) -> Result<BotLogger, ConfigError> {
        let destination_err = |source| ConfigError::LogDestination {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(destination_err)?;
        }
        let file = File::create(&self.path).map_err(destination_err)?;

        let subscriber = tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_max_level(self.level)
            .finish();

        Ok(BotLogger {
            path: self.path.clone(),
            dispatch: Dispatch::new(subscriber),
        })
    }
}

/// An opened log destination for one bot.
#[derive(Clone)]
pub struct BotLogger {
    path: PathBuf,
    dispatch: Dispatch,
}

impl BotLogger {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this logger as the current thread's default subscriber.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Installs this logger as the process-wide subscriber.
    ///
    /// Fails if another subscriber was installed first.
    pub fn install_global(&self) -> Result<(), ConfigError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|err| ConfigError::LogSubscriber(err.to_string()))
    }
}
