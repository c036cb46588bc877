//! Test factory for creating Serenity Message objects.

use serenity::all::{Message, User};

/// Creates a test Serenity Message in a guild text channel.
///
/// All fields other than the ones given are set to the values Discord sends
/// for a plain text message (no embeds, attachments, or mentions).
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Discord channel ID (snowflake)
/// - `author` - Message author
/// - `content` - Message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(message_id: u64, channel_id: u64, author: User, content: &str) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": author,
        "content": content,
        "timestamp": "2025-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message")
}
