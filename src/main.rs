//! Arc Timer - a countdown timer service
//!
//! This is the main entry point for the arc-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use arc_timer::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::render_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("arc_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting arc-timer server v{}", env!("CARGO_PKG_VERSION"));

    let input = config.duration_input()?;
    info!(
        "Configuration: host={}, port={}, timer={}m {}s, dial={}",
        config.host, config.port, config.minutes, config.seconds, config.dial_size
    );

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        input,
        config.renderer(),
    ));

    // Render every timer change in the background
    tokio::spawn(render_task(state.engine.clone(), state.renderer));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /timer/configure - Set minutes and seconds");
    info!("  POST /timer/adjust    - Step minutes or seconds up/down");
    info!("  POST /timer/start     - Start the countdown");
    info!("  POST /timer/cancel    - Cancel the countdown");
    info!("  POST /timer/toggle    - Start or cancel");
    info!("  GET  /timer/status    - Current timer state");
    info!("  GET  /timer/frame     - Dial frame for the current state");
    info!("  GET  /health          - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(_) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to install signal handler: {}", e),
            }
        }
    }

    state.engine.shutdown();
    info!("Server shutdown complete");
    Ok(())
}
