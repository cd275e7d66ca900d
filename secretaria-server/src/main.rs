use secretaria_server::{AppState, Config, api, init_logger_with_file};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();

    let log_dir = format!("{}/logs", config.work_dir);
    std::fs::create_dir_all(&log_dir).ok();
    let log_level = if config.is_production() { "info" } else { "debug" };
    init_logger_with_file(Some(log_level), Some(&log_dir));

    info!(
        "Starting secretaria-server v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let state = AppState::initialize(config.clone()).await?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("HTTP API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
