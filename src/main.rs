mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    bot,
    command::CommandRegistry,
    config::Config,
    error::AppError,
    gateway::{SerenityGateway, ShutdownSignal},
    service::shutdown::ShutdownSequencer,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::load()?);
    let log = startup::open_activity_log(&config)?;

    tracing::info!("Starting helper bot");

    let (shutdown, listener) = ShutdownSignal::new();
    let sequencer = ShutdownSequencer::new();
    let registry = Arc::new(CommandRegistry::with_defaults());
    tracing::info!("Registered command handlers: {}", registry.names().join(", "));

    // Initialize Discord bot and extract HTTP client
    let (client, discord_http) = bot::start::init_bot(
        config.clone(),
        registry,
        log.clone(),
        sequencer.clone(),
        shutdown.clone(),
    )
    .await?;

    let state = AppState::new(
        config.clone(),
        Arc::new(SerenityGateway::new(discord_http, shutdown)),
        log.clone(),
        sequencer,
    );

    match startup::bind_api(&config).await {
        Ok(api_listener) => {
            tokio::spawn(startup::serve_api(api_listener, state));
        }
        Err(e) => log.record(&format!(
            "[API ERROR] Could not bind {}: {}",
            config.api_addr, e
        )),
    }

    bot::start::run_bot(client, listener, log).await;

    tracing::info!("Bot disconnected, exiting");

    Ok(())
}
