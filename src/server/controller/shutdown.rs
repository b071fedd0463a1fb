use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::ShutdownDto,
    server::{
        error::AppError, middleware::auth::Authorized, model::shutdown::ShutdownPlan,
        state::AppState,
    },
};

/// Shut the bot down from the dashboard.
///
/// Runs the same sequence as the chat `stop` command without the acknowledgment reply and
/// with the API grace delay. The response is sent before the disconnect fires.
///
/// # Returns
/// - `200 OK` - `{"success": true, "message": "Bot is shutting down."}`
/// - `500 Internal Server Error` - A shutdown is already in progress
pub async fn shutdown(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plan = ShutdownPlan {
        console_channel_id: state.config.channels.console,
        notice: "🛑 **The bot is disconnecting (requested from the dashboard).**".to_string(),
        acknowledgement: None,
        log_entry: "[API] Shutdown requested from the dashboard.".to_string(),
        grace: state.config.shutdown.api_grace,
    };

    if let Err(e) = state
        .sequencer
        .begin(
            Authorized::local_dashboard(),
            state.gateway.clone(),
            state.log.clone(),
            plan,
        )
        .await
    {
        state
            .log
            .record(&format!("[API ERROR] Shutdown failed: {}", e));
        return Err(e.into());
    }

    Ok(Json(ShutdownDto {
        success: true,
        message: "Bot is shutting down.".to_string(),
    }))
}
