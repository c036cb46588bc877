//! Command-line interface for launching one bot.
//!
//! ```text
//! marsbots <bot_name> [--metadata-path PATH] [--cog-paths ID...] [--dotenv-path PATH]
//! ```
//!
//! Paths that are not given default to the bot's directory,
//! `<bots_dir>/<bot_name>/`, which holds `metadata.json` and `.env`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::BOTS_DIR;

#[derive(Parser, Debug)]
#[command(name = "marsbots", about = "Launch a Discord bot described by a metadata file")]
pub struct Cli {
    /// Name of the bot to load from the bots directory
    pub bot_name: String,

    /// Path to a custom metadata file
    #[arg(long = "metadata-path", alias = "metadata_path")]
    pub metadata_path: Option<PathBuf>,

    /// One or more extension identifiers to load, in order
    #[arg(long = "cog-paths", alias = "cog-path", num_args = 1..)]
    pub cog_paths: Vec<String>,

    /// Path to a custom .env file
    #[arg(long = "dotenv-path")]
    pub dotenv_path: Option<PathBuf>,

    /// Directory containing one sub-directory per bot
    #[arg(long = "bots-dir", default_value = BOTS_DIR)]
    pub bots_dir: PathBuf,
}

/// Fully resolved launch parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub bot_name: String,
    pub metadata_path: PathBuf,
    pub cog_paths: Vec<String>,
    pub dotenv_path: PathBuf,
}

impl Cli {
    /// Fills in per-bot defaults for anything not given on the command line.
    pub fn into_launch_options(self) -> LaunchOptions {
        let bot_dir = self.bots_dir.join(&self.bot_name);

        let cog_paths = if self.cog_paths.is_empty() {
            vec![default_extension_id(&self.bot_name)]
        } else {
            self.cog_paths
        };

        LaunchOptions {
            metadata_path: self
                .metadata_path
                .unwrap_or_else(|| bot_dir.join("metadata.json")),
            dotenv_path: self.dotenv_path.unwrap_or_else(|| bot_dir.join(".env")),
            cog_paths,
            bot_name: self.bot_name,
        }
    }
}

/// Conventional extension identifier for a bot: `bots.<name>.<name>`.
pub fn default_extension_id(bot_name: &str) -> String {
    format!("{BOTS_DIR}.{bot_name}.{bot_name}")
}
