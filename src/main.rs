use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use prospectus::application::ports::{FileLoader, InferenceClient};
use prospectus::infrastructure::llm::{HuggingFaceClient, MockInferenceClient};
use prospectus::infrastructure::observability::{TracingConfig, init_tracing};
use prospectus::infrastructure::text_processing::CompositeFileLoader;
use prospectus::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .map(Environment::try_from)
        .unwrap_or(Ok(Environment::default()))
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    let scaffold_config = ScaffoldConfig::from_env();
    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::brochure_formats());

    let inference_client: Arc<dyn InferenceClient> = if scaffold_config.enabled {
        tracing::warn!(
            delay_ms = scaffold_config.mock_response_delay_ms,
            "Scaffold mode enabled, inference backend will not be called"
        );
        Arc::new(MockInferenceClient::new(
            scaffold_config.mock_response_delay(),
        ))
    } else {
        if !settings.inference.has_credential() {
            tracing::warn!("HF_TOKEN is not set, generation requests will fail");
        }
        let client = HuggingFaceClient::from_settings(&settings.inference)
            .context("Failed to build inference client")?;
        tracing::info!(endpoint = client.endpoint(), "Inference client configured");
        Arc::new(client)
    };

    let router = create_router(AppState::new(file_loader, inference_client));

    serve(router, &settings).await
}

async fn serve(router: Router, settings: &Settings) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
