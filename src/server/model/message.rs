use serenity::all::Message;

/// Author of an inbound message, with the guild roles attached to the event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    /// Display name (Discord username).
    pub name: String,
    /// Username with discriminator where one still exists, used in log lines.
    pub tag: String,
    pub bot: bool,
    pub role_ids: Vec<u64>,
}

impl Author {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}

/// A chat message delivered by the gateway, scoped to one handling pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    pub id: u64,
    pub channel_id: u64,
    pub author: Author,
    pub content: String,
}

/// Converts a gateway message into the bot's event model.
///
/// Roles come from the partial guild member embedded in guild `MESSAGE_CREATE` events. Direct
/// messages carry no member, so their authors have an empty role set and can never pass an
/// admin check.
impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        let role_ids = message
            .member
            .as_ref()
            .map(|member| member.roles.iter().map(|role| role.get()).collect())
            .unwrap_or_default();

        Self {
            id: message.id.get(),
            channel_id: message.channel_id.get(),
            author: Author {
                id: message.author.id.get(),
                name: message.author.name.clone(),
                tag: message.author.tag(),
                bot: message.author.bot,
                role_ids,
            },
            content: message.content.clone(),
        }
    }
}

/// A message read back from channel history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelMessage {
    pub author: String,
    pub content: String,
}
