use service_core::observability::init_tracing;
use summary_service::config::SummaryConfig;
use summary_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = SummaryConfig::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_tracing(
        "summary-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )
    .map_err(|e| std::io::Error::other(format!("Tracing initialization error: {}", e)))?;

    if !config.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set; summary requests will fail until it is configured");
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
