//! Shutdown sequencer shared by the chat command and the control API.
//!
//! A shutdown notifies the console channel, acknowledges the request, writes the activity
//! log, then disconnects after a grace delay so the messages have time to reach Discord.
//! The sequencer is the only shared mutable state in the process: its state cell makes the
//! `Idle -> NotifyPending` transition atomic, so two concurrent requests cannot both start a
//! shutdown.

use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::server::{
    error::shutdown::ShutdownError,
    gateway::ChatGateway,
    logger::ActivityLog,
    middleware::auth::Authorized,
    model::shutdown::{ShutdownPlan, ShutdownState},
};

#[derive(Default)]
struct Progress {
    state: ShutdownState,
    history: Vec<ShutdownState>,
}

impl Progress {
    fn advance(&mut self, next: ShutdownState) {
        if self.state.next() != Some(next) {
            tracing::error!(
                "Invalid shutdown transition {:?} -> {:?}",
                self.state,
                next
            );
            return;
        }

        tracing::debug!("Shutdown state {:?} -> {:?}", self.state, next);
        self.state = next;
        self.history.push(next);
    }
}

#[derive(Clone, Default)]
pub struct ShutdownSequencer {
    progress: Arc<Mutex<Progress>>,
}

impl ShutdownSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn state(&self) -> ShutdownState {
        self.progress.lock().await.state
    }

    /// States entered so far, in order, excluding the initial `Idle`.
    pub async fn history(&self) -> Vec<ShutdownState> {
        self.progress.lock().await.history.clone()
    }

    /// Runs a shutdown and arms the delayed disconnect.
    ///
    /// The console notice and the acknowledgment are best-effort: delivery failures are
    /// written to the activity log and the sequence continues. Once this returns `Ok`, the
    /// disconnect will fire after `plan.grace` and cannot be aborted.
    ///
    /// # Arguments
    /// - `authorized` - Proof the request passed authorization
    /// - `gateway` - Chat platform used for the notice, the acknowledgment and the disconnect
    /// - `log` - Activity log
    /// - `plan` - Messages, target channels and grace delay of this shutdown
    ///
    /// # Returns
    /// - `Ok(JoinHandle)` - Handle of the one-shot disconnect task
    /// - `Err(ShutdownError::AlreadyInProgress)` - Another shutdown already started
    pub async fn begin(
        &self,
        authorized: Authorized,
        gateway: Arc<dyn ChatGateway>,
        log: Arc<dyn ActivityLog>,
        plan: ShutdownPlan,
    ) -> Result<JoinHandle<()>, ShutdownError> {
        {
            let mut progress = self.progress.lock().await;
            if progress.state != ShutdownState::Idle {
                return Err(ShutdownError::AlreadyInProgress(progress.state));
            }
            progress.advance(ShutdownState::NotifyPending);
        }

        tracing::info!("Shutdown initiated by {}", authorized.actor());

        if let Err(e) = gateway
            .send_message(plan.console_channel_id, &plan.notice)
            .await
        {
            log.record(&format!("[ERROR] Could not send shutdown notice: {}", e));
        }

        if let Some(ack) = &plan.acknowledgement {
            if let Err(e) = gateway.reply(ack.channel_id, ack.message_id, &ack.text).await {
                log.record(&format!(
                    "[ERROR] Could not acknowledge shutdown request: {}",
                    e
                ));
            }
        }
        self.advance(ShutdownState::AckSent).await;

        log.record(&plan.log_entry);

        self.advance(ShutdownState::GraceWait).await;

        let sequencer = self.clone();
        let grace = plan.grace;

        Ok(tokio::spawn(async move {
            tokio::time::sleep(grace).await;

            sequencer.advance(ShutdownState::Disconnecting).await;
            gateway.disconnect().await;
            sequencer.advance(ShutdownState::Terminated).await;

            tracing::info!("Shutdown finished: {:?}", sequencer.history().await);
        }))
    }

    async fn advance(&self, next: ShutdownState) {
        self.progress.lock().await.advance(next);
    }
}
