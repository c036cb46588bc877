//! Discord bot bootstrap and lifecycle.
//!
//! A bot process starts from a metadata file and runs exactly one bot:
//!
//! 1. Load `.env` and bot metadata
//! 2. Derive the gateway capabilities the bot requests
//! 3. Open the bot's log file
//! 4. Load extensions, stopping at the first failure
//! 5. Resolve the token and run the Serenity client until it disconnects
//!
//! Every step runs sequentially before the client's event loop takes over. When
//! the [`start::Bootstrapper`] is dropped, whether after a clean disconnect or a
//! failed startup, its [`notify::ShutdownNotifier`] posts a best-effort
//! "bot is down" notice to `CRASH_WEBHOOK_URL`.
//!
//! # Gateway Intents
//!
//! Message content and message delivery are always requested. `GUILD_PRESENCES`
//! and `GUILD_MEMBERS` are privileged intents requested through the metadata
//! `intents` list and must also be enabled in the Discord Developer Portal.

pub mod handler;
pub mod notify;
pub mod start;

#[cfg(test)]
mod test;
