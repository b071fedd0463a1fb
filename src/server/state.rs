//! Application state shared across all control API handlers.
//!
//! The state is built once during startup and cloned for each request through Axum's state
//! extraction. Every field is reference-counted, so clones share the same gateway, activity
//! log and shutdown sequencer as the bot.

use std::sync::Arc;

use crate::server::{
    config::Config, gateway::ChatGateway, logger::ActivityLog,
    service::shutdown::ShutdownSequencer,
};

#[derive(Clone)]
pub struct AppState {
    /// Channel IDs and grace delays.
    pub config: Arc<Config>,

    /// Discord access for reading and posting messages and for disconnecting.
    pub gateway: Arc<dyn ChatGateway>,

    pub log: Arc<dyn ActivityLog>,

    /// Same sequencer the chat `stop` command uses, so only one shutdown can ever run.
    pub sequencer: ShutdownSequencer,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        gateway: Arc<dyn ChatGateway>,
        log: Arc<dyn ActivityLog>,
        sequencer: ShutdownSequencer,
    ) -> Self {
        Self {
            config,
            gateway,
            log,
            sequencer,
        }
    }
}
