//! Domain models for bot configuration.
//!
//! - **metadata** - `BotMetadata`, parsed from the per-bot JSON file
//! - **capability** - privileged gateway capabilities derived from metadata intents

pub mod capability;
pub mod metadata;
