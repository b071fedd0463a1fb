//! HTTP handlers for the local control API used by the desktop dashboard.
//!
//! The API has no authentication of its own and binds to loopback by default. Handlers log
//! failures to the activity log with an `[API ERROR]` prefix and map them to `AppError`
//! responses.

pub mod message;
pub mod shutdown;

#[cfg(test)]
mod test;
