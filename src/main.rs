//! route-registry demo server and route listing.
//!
//! ```text
//! route-registry [--config site.toml] [serve]   start the demo site
//! route-registry [--config site.toml] routes    print the registry in order
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use route_registry::config::{load_config, AppConfig};
use route_registry::http::{build_registry, HttpServer};
use route_registry::observability::init_logging;

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "Typed route registry demo", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the demo site
    Serve,
    /// List registered routes
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Routes => print_routes(&config),
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "route-registry starting");

    let server = HttpServer::new(config)?;
    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        routes = server.registry().len(),
        "Listening for connections"
    );

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn print_routes(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = build_registry(config)?;
    let width = registry.names().map(str::len).max().unwrap_or(0);

    for summary in registry.summaries() {
        let bound = if summary.has_handler { "handler" } else { "link" };
        println!("{:width$}  {:7}  {}", summary.name, bound, summary.pattern);
    }
    Ok(())
}
