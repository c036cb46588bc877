use std::path::PathBuf;

use test_utils::builder::TestBuilder;

use crate::bot::start::{prepare, resolve_token, Bootstrapper};
use crate::cli::LaunchOptions;
use crate::config::{Config, UNLIKELY_PREFIX};
use crate::error::{auth::AuthError, config::ConfigError, extension::ExtensionLoadErrorKind, AppError};
use crate::extension::builtin::{self, HELP_EXTENSION, PING_EXTENSION};
use crate::logging::LogConfig;
use crate::model::{capability::Capability, metadata::BotMetadata};


fn launch_options(metadata_path: PathBuf, cog_paths: &[&str]) -> LaunchOptions {
    LaunchOptions {
        bot_name: "chatbot".to_string(),
        metadata_path,
        cog_paths: cog_paths.iter().map(|id| id.to_string()).collect(),
        dotenv_path: PathBuf::from(".env"),
    }
}

fn config(log_root: &std::path::Path) -> Config {
    Config {
        crash_webhook_url: None,
        log_root: log_root.to_path_buf(),
    }
}
