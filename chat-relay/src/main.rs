use chat_relay::config::RelayConfig;
use chat_relay::services::metrics::init_metrics;
use chat_relay::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RelayConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        &config.service_name,
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    );

    init_metrics();

    let app = Application::build(config).await?;
    tracing::info!("Chat relay listening on port {}", app.port());

    app.run_until_stopped().await?;

    Ok(())
}
