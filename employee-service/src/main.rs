use employee_service::config::EmployeeConfig;
use employee_service::services::init_metrics;
use employee_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = EmployeeConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "employee-service",
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );

    init_metrics();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.common.port,
        database = %config.mongodb.database,
        collection = %config.mongodb.collection,
        "Starting employee service"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start employee service: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    app.run_until_stopped().await
}
