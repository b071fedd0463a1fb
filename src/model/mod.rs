//! Data transfer objects exchanged with the dashboard over the control API.

pub mod api;
