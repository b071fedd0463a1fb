//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error type
//! returned by gateway calls, command handlers, startup code and control API endpoints.
//! Chat-side code never lets an `AppError` escape: failures are written to the activity log
//! and the event is dropped.

pub mod auth;
pub mod config;
pub mod shutdown;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, shutdown::ShutdownError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. Variants carrying a message
/// let controllers choose the text that reaches the HTTP client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Aborts startup; results in 500 Internal Server Error if it ever reaches a handler.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A shutdown request arrived while another one is running.
    ///
    /// Results in 500 Internal Server Error carrying the error message.
    #[error(transparent)]
    ShutdownErr(#[from] ShutdownError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error while opening the activity log or binding the API listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// An upstream call failed and the client gets a specific explanatory message.
    ///
    /// Results in 500 Internal Server Error with the provided message.
    #[error("{0}")]
    Unavailable(String),

    /// The request body was missing, not JSON, or did not match the expected shape.
    ///
    /// Results in 400 Bad Request with the rejection text.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `JsonRejection`
/// - 500 Internal Server Error with the error text - For `ShutdownErr` and `Unavailable`
/// - 500 Internal Server Error with a generic message - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::JsonRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::ShutdownErr(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::Unavailable(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
