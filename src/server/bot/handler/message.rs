use serenity::all::Message;
use std::sync::Arc;

use super::Handler;
use crate::server::{
    gateway::SerenityGateway, model::message::IncomingMessage,
    service::command_router::CommandRouter,
};

/// Handle message creation in a channel
pub async fn handle_message(handler: &Handler, gateway: Arc<SerenityGateway>, message: Message) {
    let incoming = IncomingMessage::from(&message);

    let router = CommandRouter::new(
        handler.config.clone(),
        handler.registry.clone(),
        gateway,
        handler.log.clone(),
        handler.sequencer.clone(),
    );

    let outcome = router.route(&incoming).await;

    tracing::debug!(
        "Message {} in channel {} from {}: {:?}",
        incoming.id,
        incoming.channel_id,
        incoming.author.tag,
        outcome
    );
}
