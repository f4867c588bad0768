use form_lab::adapters::http::build_app;
use form_lab::config::AppConfig;
use form_lab::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.server);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e.into());
    }

    let addr = config.server.socket_addr()?;
    let app = build_app(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        environment = ?config.server.environment,
        max_repeat_count = config.forms.max_repeat_count,
        "Listening on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
