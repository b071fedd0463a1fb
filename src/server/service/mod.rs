//! Service layer for command routing and shutdown orchestration.
//!
//! Services sit between the entry points (gateway event handler, control API controllers)
//! and the `ChatGateway` capability. They are responsible for:
//!
//! - **Routing**: Classifying inbound messages and dispatching them (`CommandRouter`)
//! - **Orchestration**: Running the ordered side effects of a shutdown (`ShutdownSequencer`)

pub mod command_router;
pub mod shutdown;
