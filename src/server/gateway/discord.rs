use serenity::{
    all::{ChannelId, CreateMessage, GetMessages, MessageId, MessageReference},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use super::{ChatGateway, ShutdownSignal};
use crate::server::{error::AppError, model::message::ChannelMessage};

/// `ChatGateway` backed by Serenity's HTTP client.
///
/// Cheap to construct; the bot builds one per event from the context's HTTP client.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    shutdown: ShutdownSignal,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, shutdown: ShutdownSignal) -> Self {
        Self { http, shutdown }
    }
}

#[async_trait]
impl ChatGateway for SerenityGateway {
    async fn send_message(&self, channel_id: u64, text: &str) -> Result<(), AppError> {
        let message = CreateMessage::new().content(text);

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }

    async fn reply(&self, channel_id: u64, message_id: u64, text: &str) -> Result<(), AppError> {
        let channel_id = ChannelId::new(channel_id);
        let message = CreateMessage::new()
            .content(text)
            .reference_message(MessageReference::from((
                channel_id,
                MessageId::new(message_id),
            )));

        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }

    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        let messages = ChannelId::new(channel_id)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages
            .into_iter()
            .map(|message| ChannelMessage {
                author: message.author.name,
                content: message.content,
            })
            .collect())
    }

    async fn disconnect(&self) {
        tracing::info!("Disconnecting from Discord");
        self.shutdown.trigger();
    }
}
