//! Fakes and fixtures shared by the crate's unit tests.

use serenity::async_trait;
use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
    time::Duration,
};
use tokio::time::Instant;

use crate::server::{
    config::{ChannelConfig, Config, ShutdownConfig, StopChannelScope},
    error::AppError,
    gateway::ChatGateway,
    logger::ActivityLog,
    model::message::{Author, ChannelMessage, IncomingMessage},
};

pub const CONSOLE_CHANNEL: u64 = 1;
pub const COMMANDS_CHANNEL: u64 = 2;
pub const MESSAGE_CHANNEL: u64 = 3;
pub const CALCULATOR_CHANNEL: u64 = 4;
pub const GAMES_CHANNEL: u64 = 5;
pub const ADMIN_ROLE: u64 = 99;

pub fn test_config() -> Config {
    Config {
        discord_bot_token: "test-token".to_string(),
        prefix: "!".to_string(),
        channels: ChannelConfig {
            console: CONSOLE_CHANNEL,
            commands: COMMANDS_CHANNEL,
            message: MESSAGE_CHANNEL,
            calculator: CALCULATOR_CHANNEL,
            games: GAMES_CHANNEL,
        },
        admin_role_id: ADMIN_ROLE,
        stop_channel_scope: StopChannelScope::Commands,
        shutdown: ShutdownConfig {
            grace: Duration::from_secs(3),
            api_grace: Duration::from_secs(1),
        },
        api_addr: "127.0.0.1:0".to_string(),
        log_file: PathBuf::from("logs/test.log"),
    }
}

/// A message from a human member holding `role_ids`.
pub fn user_message(content: &str, channel_id: u64, role_ids: &[u64]) -> IncomingMessage {
    IncomingMessage {
        id: 5000,
        channel_id,
        author: Author {
            id: 42,
            name: "alice".to_string(),
            tag: "alice".to_string(),
            bot: false,
            role_ids: role_ids.to_vec(),
        },
        content: content.to_string(),
    }
}

pub fn bot_message(content: &str, channel_id: u64) -> IncomingMessage {
    let mut message = user_message(content, channel_id, &[ADMIN_ROLE]);
    message.author.id = 7;
    message.author.name = "helper".to_string();
    message.author.tag = "helper".to_string();
    message.author.bot = true;
    message
}

/// One call made against the fake gateway, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayCall {
    Send {
        channel_id: u64,
        text: String,
    },
    Reply {
        channel_id: u64,
        message_id: u64,
        text: String,
    },
    History {
        channel_id: u64,
        limit: u8,
    },
    Disconnect,
}

/// Records every call; sends, replies and history reads can be made to fail.
///
/// Failures surface as `AppError::DiscordErr`, the same variant `SerenityGateway` returns.
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<GatewayCall>>,
    history: Mutex<Vec<ChannelMessage>>,
    disconnected_at: Mutex<Option<Instant>>,
    fail_sends: AtomicBool,
    fail_replies: AtomicBool,
    fail_history: AtomicBool,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel history returned by `recent_messages`, newest first.
    pub fn with_history(self, messages: Vec<ChannelMessage>) -> Self {
        *self.history.lock().unwrap() = messages;
        self
    }

    pub fn failing_sends(self) -> Self {
        self.fail_sends.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_replies(self) -> Self {
        self.fail_replies.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_history(self) -> Self {
        self.fail_history.store(true, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sends(&self) -> Vec<(u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Send { channel_id, text } => Some((channel_id, text)),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Reply { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn disconnected_at(&self) -> Option<Instant> {
        *self.disconnected_at.lock().unwrap()
    }

    fn push(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn send_message(&self, channel_id: u64, text: &str) -> Result<(), AppError> {
        self.push(GatewayCall::Send {
            channel_id,
            text: text.to_string(),
        });

        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("send failed").into());
        }
        Ok(())
    }

    async fn reply(&self, channel_id: u64, message_id: u64, text: &str) -> Result<(), AppError> {
        self.push(GatewayCall::Reply {
            channel_id,
            message_id,
            text: text.to_string(),
        });

        if self.fail_replies.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("reply failed").into());
        }
        Ok(())
    }

    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        self.push(GatewayCall::History { channel_id, limit });

        if self.fail_history.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("history failed").into());
        }
        Ok(self.history.lock().unwrap().clone())
    }

    async fn disconnect(&self) {
        self.push(GatewayCall::Disconnect);
        *self.disconnected_at.lock().unwrap() = Some(Instant::now());
    }
}

/// Activity log keeping entries in memory.
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl ActivityLog for RecordingLog {
    fn record(&self, entry: &str) {
        self.entries.lock().unwrap().push(entry.to_string());
    }
}
