//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::user::user_json;

/// Creates a test Serenity Message as delivered by a guild `MESSAGE_CREATE` event.
///
/// The message carries a partial guild member holding `role_ids`, which is how the bot
/// reads the author's roles without consulting the cache.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author` - `(user_id, username, bot)` of the author
/// - `content` - Raw message text
/// - `role_ids` - Role IDs of the author's guild member
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::create_test_message;
///
/// let message = create_test_message(1000, 2, (42, "alice", false), "!stop", &[99]);
/// assert_eq!(message.content, "!stop");
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author: (u64, &str, bool),
    content: &str,
    role_ids: &[u64],
) -> Message {
    let (user_id, name, bot) = author;
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": "100000000000000000",
        "author": user_json(user_id, name, bot),
        "member": {
            "roles": roles,
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "deaf": false,
            "mute": false,
            "flags": 0,
        },
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
