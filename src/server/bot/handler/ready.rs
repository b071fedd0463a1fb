//! Ready event handler.
//!
//! Fired after every gateway identify, including re-identifies after a dropped session. The
//! bot records the connection in the activity log and posts an online notice to the console
//! channel the first time only.

use serenity::all::Ready;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::server::{config::Config, gateway::ChatGateway, logger::ActivityLog};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `gateway` - Gateway used to post the online notice
/// - `config` - Provides the console channel
/// - `log` - Activity log
/// - `announced` - Process-wide flag recording whether the notice was already posted
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    gateway: &dyn ChatGateway,
    config: &Config,
    log: &dyn ActivityLog,
    announced: &AtomicBool,
    ready: Ready,
) {
    announce_once(
        gateway,
        config,
        log,
        announced,
        &ready.user.name,
        &ready.user.tag(),
    )
    .await;
}

/// Runs `announce_online` unless an earlier session already did.
pub async fn announce_once(
    gateway: &dyn ChatGateway,
    config: &Config,
    log: &dyn ActivityLog,
    announced: &AtomicBool,
    name: &str,
    tag: &str,
) {
    if announced.swap(true, Ordering::SeqCst) {
        tracing::info!("Reconnected to Discord as {}", tag);
        return;
    }

    announce_online(gateway, config, log, name, tag).await;
}

/// Logs the connection and posts the online notice to the console channel.
///
/// A failed post is logged; the bot keeps running.
pub async fn announce_online(
    gateway: &dyn ChatGateway,
    config: &Config,
    log: &dyn ActivityLog,
    name: &str,
    tag: &str,
) {
    log.record(&format!("[INFO] Connected as {}", tag));

    let notice = format!("✅ **{} is now online!**", name);
    if let Err(e) = gateway.send_message(config.channels.console, &notice).await {
        log.record(&format!("[ERROR] Could not send startup message: {}", e));
    }
}
