use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        message::{get_messages, send_message},
        shutdown::shutdown,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shutdown", post(shutdown))
        .route("/messages", get(get_messages))
        .route("/messages/send", post(send_message))
        .layer(TraceLayer::new_for_http())
}
