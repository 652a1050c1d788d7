use idraft::server::{self, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    idraft::init_tracing("info,idraft=debug,tower_http=debug");

    tracing::info!("Starting iDraft export service...");

    let config = Config::load()?;
    tracing::info!("Configuration loaded");

    let app = server::router(&config.server);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("iDraft export service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - POST /create-pdf");
    tracing::info!("  - GET  /health");

    axum::serve(listener, app).await?;

    Ok(())
}
