use std::time::Duration;

/// Progress of the process shutdown.
///
/// States only ever move forward, one step at a time, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShutdownState {
    #[default]
    Idle,
    /// Authorized; console notice being sent.
    NotifyPending,
    /// Notice and acknowledgment attempted.
    AckSent,
    /// Disconnect timer armed.
    GraceWait,
    Disconnecting,
    Terminated,
}

impl ShutdownState {
    /// The only state this one may advance to.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::NotifyPending),
            Self::NotifyPending => Some(Self::AckSent),
            Self::AckSent => Some(Self::GraceWait),
            Self::GraceWait => Some(Self::Disconnecting),
            Self::Disconnecting => Some(Self::Terminated),
            Self::Terminated => None,
        }
    }
}

/// Reply that acknowledges a chat-triggered shutdown.
#[derive(Clone, Debug)]
pub struct Acknowledgement {
    pub channel_id: u64,
    pub message_id: u64,
    pub text: String,
}

/// Side effects of one shutdown, prepared by the entry point that requested it.
#[derive(Clone, Debug)]
pub struct ShutdownPlan {
    pub console_channel_id: u64,
    pub notice: String,
    pub acknowledgement: Option<Acknowledgement>,
    pub log_entry: String,
    pub grace: Duration,
}
