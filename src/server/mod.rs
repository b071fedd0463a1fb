//! Bot runtime, command routing and the local control API.
//!
//! This module contains everything that runs in the bot process: the Discord gateway
//! integration, the command router with its authorization rules, the shutdown sequencer,
//! and the HTTP control API used by the desktop dashboard. The HTTP side uses Axum and the
//! chat side uses Serenity; both talk to Discord through the same `ChatGateway` capability.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers for the control API
//! - **Service Layer** (`service/`) - Command routing and shutdown sequencing
//! - **Command Layer** (`command/`) - Channel-scoped sub-command handlers and their registry
//! - **Model Layer** (`model/`) - Inbound message events, parsed commands, shutdown states
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authorization guard for privileged chat commands
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment or JSON file based configuration
//! - **Gateway** (`gateway/`) - `ChatGateway` capability and its Serenity implementation
//! - **Logger** (`logger`) - Append-only activity log shared with the dashboard
//! - **State** (`state`) - Shared state handed to the control API handlers
//! - **Startup** (`startup`) - Tracing, activity log and listener initialization
//! - **Router** (`router`) - Axum route configuration
//! - **Bot** (`bot/`) - Serenity client construction and event handlers
//!
//! # Message Flow
//!
//! 1. **Bot** receives a `MESSAGE_CREATE` event and converts it to an `IncomingMessage`
//! 2. **Service** (`CommandRouter`) filters bots and non-prefixed text, parses the command
//! 3. **Middleware** (`AuthGuard`) authorizes privileged commands
//! 4. **Service** replies, runs the `ShutdownSequencer`, or hands off to a **Command** handler

pub mod bot;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod testing;
