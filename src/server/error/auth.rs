use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Privileged command issued outside the channel that accepts it.
    ///
    /// Answered in chat with a denial reply; nothing else happens.
    #[error("User {user_id} issued a privileged command in channel {channel_id}, which does not accept it")]
    WrongChannel { user_id: u64, channel_id: u64 },

    /// Author's guild member does not hold the configured admin role.
    ///
    /// Answered in chat with a denial reply; nothing else happens.
    #[error("User {user_id} lacks the admin role {role_id}")]
    MissingRole { user_id: u64, role_id: u64 },
}

impl AuthError {
    /// User-facing denial text sent as a reply to the offending message.
    pub fn reply(&self) -> &'static str {
        match self {
            Self::WrongChannel { .. } => {
                "❌ You do not have permission to disconnect the bot from this channel."
            }
            Self::MissingRole { .. } => "❌ You do not have permission to disconnect the bot.",
        }
    }
}
