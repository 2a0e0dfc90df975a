//! Command-line interface for the Kalah server.

use clap::Parser;

/// Kalah game server with a REST API.
#[derive(Parser, Debug)]
#[command(name = "kalah")]
#[command(about = "Kalah game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
}
