//! Metadata-driven Discord bot launcher.
//!
//! Each bot is a directory holding a `metadata.json` (name, command prefix,
//! requested intents, and the name of the environment variable with its token)
//! and an optional `.env`. The launcher reads those, configures a Serenity
//! client, loads the requested extensions, and runs the bot until it
//! disconnects. One process runs one bot; restarts are left to the process
//! manager.
//!
//! # Modules
//!
//! - **Bot** (`bot/`) - Bootstrap sequence, event handler, and shutdown notice
//! - **Command** (`command/`) - Prefix command registry and dispatch
//! - **Extension** (`extension/`) - Compile-time extension registry and loader
//! - **Model** (`model/`) - Bot metadata and capability derivation
//! - **Configuration** (`config`, `cli`) - Environment and command-line inputs
//! - **Logging** (`logging`) - Per-bot log file
//! - **Error** (`error/`) - Error types for every startup stage
//!
//! # Custom extensions
//!
//! The `marsbots` binary only ships the built-in extensions. Bots with their own
//! commands build a small binary that adds their extensions to the registry:
//!
//! ```rust,ignore
//! let registry = marsbots::extension::builtin::registry()
//!     .with("bots.chatbot.chatbot", ChatbotExtension);
//! marsbots::bot::start::start(options, &registry).await?;
//! ```

pub mod bot;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod extension;
pub mod logging;
pub mod model;
