use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    logger::{ActivityLog, FileActivityLog},
    router::router,
    state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Opens the activity log file named in the configuration.
///
/// # Returns
/// - `Ok(Arc<dyn ActivityLog>)` - Log ready for writing
/// - `Err(AppError::IoErr)` - Log file or its directory could not be created
pub fn open_activity_log(config: &Config) -> Result<Arc<dyn ActivityLog>, AppError> {
    let log = FileActivityLog::open(&config.log_file)?;

    Ok(Arc::new(log))
}

/// Binds the control API listener.
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to `API_ADDR`
/// - `Err(AppError::IoErr)` - Address invalid or already in use
pub async fn bind_api(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(&config.api_addr).await?;

    Ok(listener)
}

/// Serves the control API until the process exits.
///
/// Serving errors are written to the activity log; the bot keeps running without the API.
pub async fn serve_api(listener: TcpListener, state: AppState) {
    let log = state.log.clone();
    let addr = listener
        .local_addr()
        .map(|addr: SocketAddr| addr.to_string())
        .unwrap_or_else(|_| state.config.api_addr.clone());

    log.record(&format!("[API] REST server listening on {}", addr));

    if let Err(e) = axum::serve(listener, router().with_state(state)).await {
        log.record(&format!("[API ERROR] Server stopped: {}", e));
    }
}
