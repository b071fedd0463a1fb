//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Uses the post-2023 username format (discriminator `"0"`), with no avatar.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `bot` - Whether the account is a bot account
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, name: &str, bot: bool) -> User {
    serde_json::from_value(user_json(user_id, name, bot))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Raw gateway JSON for a user, shared with the message factory.
pub(crate) fn user_json(user_id: u64, name: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
    })
}
