use anyhow::Context;
use cityinfo_core::{CityService, HttpProvider, ProviderConfig};
use cityinfo_server::config::ServerConfig;
use cityinfo_server::{api, app, telemetry, AppState};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json()?;
        println!("{}", spec);
        return Ok(());
    }

    // A missing .env file is fine; variables may come from the environment
    let _ = dotenv::dotenv();

    let _telemetry = telemetry::init_telemetry()?;

    let provider_config = ProviderConfig::from_env().context("Invalid provider configuration")?;
    let server_config = ServerConfig::from_env().context("Invalid server configuration")?;

    let provider = HttpProvider::new(&provider_config).context("Failed to create provider client")?;
    let state: AppState = Arc::new(CityService::new(
        Arc::new(provider),
        provider_config.resolution,
    ));

    let listener = tokio::net::TcpListener::bind((server_config.host.as_str(), server_config.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                server_config.host, server_config.port
            )
        })?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", local_addr);
    tracing::info!(
        "City resolution strategy: {:?}, provider: {}",
        provider_config.resolution,
        provider_config.base_url
    );
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);
    tracing::info!(
        "OpenAPI spec available at http://{}/api-docs/openapi.json",
        local_addr
    );

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
