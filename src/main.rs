//! Employee directory server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use employee_directory::adapters::http::api_router;
use employee_directory::adapters::storage::InMemoryEmployeeRepository;
use employee_directory::application::{EmployeeAiService, EmployeeService};
use employee_directory::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server)?;
    config.validate()?;

    let repository = Arc::new(InMemoryEmployeeRepository::seeded());
    let employee_service = Arc::new(EmployeeService::new(repository));
    let ai_service = Arc::new(EmployeeAiService::from_config(
        &config.ai,
        employee_service.clone(),
    )?);

    let router = api_router(employee_service, ai_service, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        ai_configured = config.ai.has_openai(),
        "employee directory listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("employee directory shut down");
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Production logs are JSON.
fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
