use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Metadata file could not be read from disk.
    #[error("Failed to read bot metadata at {path}: {source}")]
    ReadMetadata {
        /// Path of the metadata file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata file is not a well-formed JSON object of the expected shape.
    #[error("Failed to parse bot metadata at {path}: {source}")]
    ParseMetadata {
        /// Path of the metadata file
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Required metadata field is absent or empty.
    ///
    /// Both `name` and `token_env` must be present and non-empty.
    #[error("Bot metadata is missing required field `{0}`")]
    MissingField(&'static str),

    /// The `.env` file exists but could not be loaded.
    #[error("Failed to load environment file {path}: {source}")]
    Dotenv {
        /// Path of the `.env` file
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// The per-bot log destination could not be created.
    #[error("Failed to prepare log file {path}: {source}")]
    LogDestination {
        /// Path of the log file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A process-wide log subscriber was already installed.
    #[error("Failed to install log subscriber: {0}")]
    LogSubscriber(String),
}
