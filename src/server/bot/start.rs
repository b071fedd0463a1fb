use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    bot::handler::Handler,
    command::CommandRegistry,
    config::Config,
    error::AppError,
    gateway::{ShutdownListener, ShutdownSignal},
    logger::ActivityLog,
    service::shutdown::ShutdownSequencer,
};

/// Builds the Discord client without connecting it.
///
/// The client's HTTP handle is returned separately so the control API can reach Discord
/// before the gateway connection is up.
///
/// # Arguments
/// - `config` - Application configuration
/// - `registry` - Sub-command handlers for the special channels
/// - `log` - Activity log
/// - `sequencer` - Shutdown sequencer shared with the control API
/// - `shutdown` - Signal fired by `ChatGateway::disconnect`
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: Arc<Config>,
    registry: Arc<CommandRegistry>,
    log: Arc<dyn ActivityLog>,
    sequencer: ShutdownSequencer,
    shutdown: ShutdownSignal,
) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is privileged - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.clone(), registry, log, sequencer, shutdown);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the bot until the shutdown signal fires.
///
/// A login failure is written to the activity log; the process then stays up so the control
/// API remains reachable and the dashboard can still request a shutdown.
pub async fn run_bot(mut client: Client, listener: ShutdownListener, log: Arc<dyn ActivityLog>) {
    let shard_manager = client.shard_manager.clone();
    let waiter = tokio::spawn(async move {
        listener.triggered().await;
        tracing::info!("Shutdown signal received, closing shards");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    if let Err(e) = client.start().await {
        log.record(&format!("[ERROR] Login failed: {}", e));
    }

    if let Err(e) = waiter.await {
        tracing::error!("Shutdown waiter failed: {}", e);
    }
}
