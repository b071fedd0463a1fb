//! Command router for inbound chat messages.
//!
//! Every message the gateway delivers passes through `CommandRouter::route`, which decides
//! whether it is a command, whether its author may run it, and which effect follows:
//! a denial reply, the help text, a shutdown, or a hand-off to a channel-scoped handler.
//! Delivery failures are written to the activity log and never escape the router.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::server::{
    command::{CommandContext, CommandRegistry},
    config::Config,
    error::{auth::AuthError, shutdown::ShutdownError},
    gateway::ChatGateway,
    logger::ActivityLog,
    middleware::auth::{AuthGuard, Permission},
    model::{
        command::{Command, ParsedCommand},
        message::IncomingMessage,
        shutdown::{Acknowledgement, ShutdownPlan},
    },
    service::shutdown::ShutdownSequencer,
};

/// What the router did with a message.
#[derive(Debug)]
pub enum RouteOutcome {
    /// Author is a bot account.
    IgnoredBot,
    /// Text does not start with the prefix.
    NotACommand,
    /// Text is the prefix alone.
    Unrecognized,
    /// Privileged command rejected; a denial reply was attempted.
    Denied(AuthError),
    /// Shutdown running; the handle resolves after the disconnect.
    ShutdownScheduled(JoinHandle<()>),
    /// A shutdown was already in progress.
    ShutdownRefused(ShutdownError),
    Help,
    /// Handed to the named sub-command handler.
    Dispatched(&'static str),
    /// No handler owns the channel; deliberately a no-op.
    Unrouted,
}

pub struct CommandRouter {
    config: Arc<Config>,
    registry: Arc<CommandRegistry>,
    gateway: Arc<dyn ChatGateway>,
    log: Arc<dyn ActivityLog>,
    sequencer: ShutdownSequencer,
}

/// Static list of commands shown by `help`.
pub fn help_text(prefix: &str) -> String {
    format!(
        "📜 Available commands: `{p}help`, `{p}disconnect`, `{p}calc`, `{p}guess`, `{p}announce`",
        p = prefix
    )
}

impl CommandRouter {
    pub fn new(
        config: Arc<Config>,
        registry: Arc<CommandRegistry>,
        gateway: Arc<dyn ChatGateway>,
        log: Arc<dyn ActivityLog>,
        sequencer: ShutdownSequencer,
    ) -> Self {
        Self {
            config,
            registry,
            gateway,
            log,
            sequencer,
        }
    }

    /// Classifies `message` and performs the resulting side effects.
    ///
    /// # Arguments
    /// - `message` - Inbound chat message
    ///
    /// # Returns
    /// - `RouteOutcome` - Which branch handled the message
    pub async fn route(&self, message: &IncomingMessage) -> RouteOutcome {
        if message.author.bot {
            return RouteOutcome::IgnoredBot;
        }

        let Some(command) = ParsedCommand::parse(&message.content, &self.config.prefix) else {
            return RouteOutcome::NotACommand;
        };

        match command.kind() {
            Command::Empty => RouteOutcome::Unrecognized,
            Command::Stop => self.stop(message).await,
            Command::Help => self.help(message).await,
            Command::Other(_) => self.dispatch(message, &command).await,
        }
    }

    async fn stop(&self, message: &IncomingMessage) -> RouteOutcome {
        let guard = AuthGuard::new(&self.config, message);

        let authorized = match guard.require(&[Permission::StopChannel, Permission::Admin]) {
            Ok(authorized) => authorized,
            Err(err) => {
                tracing::info!("Denied shutdown request: {}", err);
                self.reply(message, err.reply()).await;
                return RouteOutcome::Denied(err);
            }
        };

        let grace = self.config.shutdown.grace;
        let plan = ShutdownPlan {
            console_channel_id: self.config.channels.console,
            notice: format!(
                "🛑 **The bot is disconnecting (Discord command from {})**",
                message.author.name
            ),
            acknowledgement: Some(Acknowledgement {
                channel_id: message.channel_id,
                message_id: message.id,
                text: format!(
                    "🔴 Disconnecting the bot in {} seconds...",
                    grace.as_secs()
                ),
            }),
            log_entry: format!("[SYSTEM] Bot stopped via Discord by {}", message.author.tag),
            grace,
        };

        match self
            .sequencer
            .begin(authorized, self.gateway.clone(), self.log.clone(), plan)
            .await
        {
            Ok(handle) => RouteOutcome::ShutdownScheduled(handle),
            Err(err) => {
                tracing::warn!("Ignoring shutdown request from {}: {}", message.author.tag, err);
                self.reply(message, "⏳ The bot is already shutting down.")
                    .await;
                RouteOutcome::ShutdownRefused(err)
            }
        }
    }

    async fn help(&self, message: &IncomingMessage) -> RouteOutcome {
        self.reply(message, &help_text(&self.config.prefix)).await;
        self.log.record(&format!(
            "[CMD] {}help used by {}",
            self.config.prefix, message.author.tag
        ));

        RouteOutcome::Help
    }

    async fn dispatch(&self, message: &IncomingMessage, command: &ParsedCommand) -> RouteOutcome {
        let Some(name) = self.config.channels.handler_for(message.channel_id) else {
            return RouteOutcome::Unrouted;
        };
        let Some(handler) = self.registry.get(name) else {
            tracing::debug!("No {} handler registered, ignoring {}", name, command.name);
            return RouteOutcome::Unrouted;
        };

        let ctx = CommandContext {
            gateway: self.gateway.as_ref(),
            message,
            command,
            log: self.log.as_ref(),
            config: &self.config,
        };

        if let Err(e) = handler.execute(ctx).await {
            self.log.record(&format!(
                "[ERROR] {} command '{}' failed: {}",
                name, command.name, e
            ));
        }

        RouteOutcome::Dispatched(name)
    }

    async fn reply(&self, message: &IncomingMessage, text: &str) {
        if let Err(e) = self
            .gateway
            .reply(message.channel_id, message.id, text)
            .await
        {
            self.log.record(&format!(
                "[ERROR] Could not reply in channel {}: {}",
                message.channel_id, e
            ));
        }
    }
}
