//! Kalah game server binary.

use anyhow::Result;
use clap::Parser;
use kalah::{Cli, GameService, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(host = %cli.host, port = cli.port, "Starting Kalah game server");

    let service = GameService::new();
    let app = router(service);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!("Server ready at http://{}:{}/", cli.host, cli.port);
    info!("Create a game with POST /games, then move with PUT /games/{{id}}/pits/{{pit}}");

    axum::serve(listener, app).await?;

    Ok(())
}
