use clap::Parser;
use impact_tracker::utils::logger;
use impact_tracker::{api, CliConfig, ProjectStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting Impact Project Tracker API");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let store = ProjectStore::new();
    let app = api::router(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
