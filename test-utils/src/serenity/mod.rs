//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's gateway would deliver, while allowing customization of the fields the bot
//! actually reads.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects with a guild member

pub mod message;
pub mod user;

pub use message::create_test_message;
pub use user::create_test_user;
