//! Chat platform capability used by the router, the sequencer and the control API.
//!
//! `ChatGateway` is the narrow surface the bot needs from Discord. The production
//! implementation (`SerenityGateway`) wraps Serenity's HTTP client; tests substitute a fake
//! that records calls. Disconnecting is signalled to the task that owns the Serenity client
//! through `ShutdownSignal`, since the shard manager lives there.

pub mod discord;

use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

use crate::server::{error::AppError, model::message::ChannelMessage};

pub use discord::SerenityGateway;

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Posts `text` to a channel.
    async fn send_message(&self, channel_id: u64, text: &str) -> Result<(), AppError>;

    /// Posts `text` to a channel as a reply to `message_id`.
    async fn reply(&self, channel_id: u64, message_id: u64, text: &str) -> Result<(), AppError>;

    /// Fetches up to `limit` of the most recent messages, newest first.
    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError>;

    /// Tears down the gateway connection. Unconditional and infallible.
    async fn disconnect(&self);
}

/// Sending half of the process shutdown signal.
#[derive(Clone)]
pub struct ShutdownSignal {
    sender: Arc<watch::Sender<bool>>,
}

/// Receiving half of the process shutdown signal, held by the bot runner.
pub struct ShutdownListener {
    receiver: watch::Receiver<bool>,
}

impl ShutdownSignal {
    pub fn new() -> (Self, ShutdownListener) {
        let (sender, receiver) = watch::channel(false);

        (
            Self {
                sender: Arc::new(sender),
            },
            ShutdownListener { receiver },
        )
    }

    pub fn trigger(&self) {
        self.sender.send_replace(true);
    }
}

impl ShutdownListener {
    /// Resolves once the signal has been triggered.
    pub async fn triggered(mut self) {
        if self.receiver.wait_for(|triggered| *triggered).await.is_err() {
            // All senders dropped without triggering; never resolve
            std::future::pending::<()>().await;
        }
    }
}
