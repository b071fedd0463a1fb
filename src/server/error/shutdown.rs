use thiserror::Error;

use crate::server::model::shutdown::ShutdownState;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShutdownError {
    /// A shutdown already left the idle state; it cannot be restarted or aborted.
    #[error("A shutdown is already in progress (state: {0:?})")]
    AlreadyInProgress(ShutdownState),
}
