//! Item management API entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;

use item_management::api::{create_router, ApiDoc, AppState};
use item_management::catalog::ItemStore;
use item_management::config::{Config, LogFormat};
use item_management::metrics;
use item_management::utils::shutdown_signal;

/// In-memory item catalog REST API.
#[derive(Parser, Debug)]
#[command(name = "item-management")]
#[command(about = "CRUD HTTP API for an in-memory item catalog")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let config = Config::load()?;
    init_logging(&config, args.verbose);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve { port }) => cmd_serve(config, port.or(args.port)).await,
        None => cmd_serve(config, args.port).await,
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose || config.verbose {
        EnvFilter::new("item_management=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ITEM MANAGEMENT API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Sample Data: {}", if config.seed_sample_data { "Enabled" } else { "Disabled" });
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  Log Level: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config, port: Option<u16>) -> anyhow::Result<()> {
    config.validate()?;

    let store = if config.seed_sample_data {
        ItemStore::with_sample_data()
    } else {
        ItemStore::new()
    };
    info!("Item store ready with {} items", store.len().await);

    let mut app_state = AppState::new(store);
    if config.metrics_enabled {
        match metrics::install_recorder() {
            Ok(handle) => app_state = app_state.with_metrics(handle),
            Err(e) => warn!("Metrics disabled, failed to install recorder: {}", e),
        }
    }

    let addr = config.socket_addr(port)?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
