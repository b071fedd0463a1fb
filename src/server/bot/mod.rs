//! Discord bot integration.
//!
//! The bot listens for guild messages, hands them to the command router and announces itself
//! in the console channel once connected. The Serenity client runs on the main task; the
//! shutdown sequencer ends it through the `ShutdownSignal` shared with every
//! `SerenityGateway`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel metadata
//! - `GUILD_MESSAGES` - Receive message events in guild channels
//! - `MESSAGE_CONTENT` - Read message text to parse commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
