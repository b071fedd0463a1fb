//! Domain models for the chat side of the bot.
//!
//! Inbound gateway events are converted to `IncomingMessage` at the bot boundary so that the
//! router, the authorization guard and the command handlers never depend on Serenity types.

pub mod command;
pub mod message;
pub mod shutdown;
