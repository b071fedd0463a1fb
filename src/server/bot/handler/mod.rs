use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use std::sync::{atomic::AtomicBool, Arc};

use crate::server::{
    command::CommandRegistry,
    config::Config,
    gateway::{SerenityGateway, ShutdownSignal},
    logger::ActivityLog,
    service::shutdown::ShutdownSequencer,
};

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    pub registry: Arc<CommandRegistry>,
    pub log: Arc<dyn ActivityLog>,
    pub sequencer: ShutdownSequencer,
    pub shutdown: ShutdownSignal,
    /// Set after the first `ready`; resumed or re-identified sessions stay quiet.
    pub announced: AtomicBool,
}

impl Handler {
    pub fn new(
        config: Arc<Config>,
        registry: Arc<CommandRegistry>,
        log: Arc<dyn ActivityLog>,
        sequencer: ShutdownSequencer,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self {
            config,
            registry,
            log,
            sequencer,
            shutdown,
            announced: AtomicBool::new(false),
        }
    }

    fn gateway(&self, ctx: &Context) -> Arc<SerenityGateway> {
        Arc::new(SerenityGateway::new(ctx.http.clone(), self.shutdown.clone()))
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        let gateway = self.gateway(&ctx);
        ready::handle_ready(
            gateway.as_ref(),
            &self.config,
            self.log.as_ref(),
            &self.announced,
            ready,
        )
        .await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let gateway = self.gateway(&ctx);
        message::handle_message(self, gateway, message).await;
    }
}
