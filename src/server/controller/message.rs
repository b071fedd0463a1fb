use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{MessageDto, SendMessageDto, SendStatusDto},
    server::{error::AppError, state::AppState},
};

/// Maximum number of messages returned by `GET /messages`.
pub const RECENT_MESSAGE_LIMIT: u8 = 25;

/// Get the most recent messages of the message channel.
///
/// Reads up to `RECENT_MESSAGE_LIMIT` messages and returns them oldest first, the order the
/// dashboard displays them in.
///
/// # Returns
/// - `200 OK` - JSON array of `{author, content}`
/// - `500 Internal Server Error` - History could not be read from Discord
pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut messages = match state
        .gateway
        .recent_messages(state.config.channels.message, RECENT_MESSAGE_LIMIT)
        .await
    {
        Ok(messages) => messages,
        Err(e) => {
            state
                .log
                .record(&format!("[API ERROR] Could not load messages: {}", e));
            return Err(AppError::Unavailable("Could not load messages.".to_string()));
        }
    };

    messages.truncate(RECENT_MESSAGE_LIMIT as usize);
    messages.reverse();

    let messages: Vec<MessageDto> = messages
        .into_iter()
        .map(|message| MessageDto {
            author: message.author,
            content: message.content,
        })
        .collect();

    Ok(Json(messages))
}

/// Post text to the message channel on behalf of the dashboard.
///
/// # Returns
/// - `200 OK` - `{"status": "sent"}`
/// - `400 Bad Request` - Body missing or malformed, or `text` missing or blank; nothing is sent
/// - `500 Internal Server Error` - Discord rejected the message
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let Some(text) = payload.text.filter(|text| !text.trim().is_empty()) else {
        return Err(AppError::BadRequest("Message text is required.".to_string()));
    };

    if let Err(e) = state
        .gateway
        .send_message(state.config.channels.message, &text)
        .await
    {
        state
            .log
            .record(&format!("[API ERROR] Could not send message: {}", e));
        return Err(e);
    }

    Ok(Json(SendStatusDto {
        status: "sent".to_string(),
    }))
}
