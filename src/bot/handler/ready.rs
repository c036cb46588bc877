//! Ready event handler.
//!
//! Fired once per connection after the gateway handshake completes. Prints the
//! "running" notice to stdout, which the process manager captures, and records
//! the connection in the bot's log.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `name` - Bot name from metadata
/// - `_ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(name: &str, _ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord as {}", name, ready.user.name);
    println!("Running {}...", name);
}
