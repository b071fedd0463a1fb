//! Channel-scoped sub-command handlers.
//!
//! The router hands non-builtin commands posted in the calculator, message or games channel
//! to the handler registered under that channel's name. Handlers own their semantics
//! entirely; the router only forwards the message, its parsed command, the activity log and
//! the configuration.

pub mod message;

use serenity::async_trait;
use std::{collections::HashMap, sync::Arc};

use crate::server::{
    config::Config,
    error::AppError,
    gateway::ChatGateway,
    logger::ActivityLog,
    model::{command::ParsedCommand, message::IncomingMessage},
};

pub use message::MessageCommand;

/// Everything a handler receives for one invocation.
pub struct CommandContext<'a> {
    pub gateway: &'a dyn ChatGateway,
    pub message: &'a IncomingMessage,
    pub command: &'a ParsedCommand,
    pub log: &'a dyn ActivityLog,
    pub config: &'a Config,
}

#[async_trait]
pub trait ChannelCommand: Send + Sync {
    /// Registry key; also the channel name the handler is bound to.
    fn name(&self) -> &'static str;

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<(), AppError>;
}

/// Handlers keyed by lower-cased name. Built once at startup, read-only afterwards.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn ChannelCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every handler bundled with the bot.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MessageCommand));
        registry
    }

    /// Adds `handler`, replacing and returning any handler with the same name.
    pub fn register(
        &mut self,
        handler: Arc<dyn ChannelCommand>,
    ) -> Option<Arc<dyn ChannelCommand>> {
        self.handlers
            .insert(handler.name().to_lowercase(), handler)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ChannelCommand>> {
        self.handlers.get(&name.to_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
