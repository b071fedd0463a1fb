//! HelperBot Test Utils
//!
//! Shared testing utilities for the helperbot crate. Provides factories for Serenity model
//! objects so that gateway event conversion can be tested without a live Discord connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! let user = create_test_user(42, "alice", false);
//! let message = create_test_message(1000, 2, (42, "alice", false), "!help", &[99]);
//! ```

pub mod serenity;
