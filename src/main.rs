//! SCA lab HTTP service entry point.

use std::io::{self, IsTerminal};

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sca_lab_app::config::Config;
use sca_lab_app::error::AppError;
use sca_lab_app::server;

/// Minimal HTTP service used as a target for dependency scanning labs.
#[derive(Parser, Debug)]
#[command(name = "sca-lab-app")]
#[command(about = "Two-route HTTP service used as a target for SCA scanning demonstrations")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Port to listen on (overrides SCA_LAB_PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Serve the HTTP routes (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => cmd_serve(args.verbose, args.port).await,
        Command::CheckConfig => cmd_check_config(args.port),
    }
}

/// Load configuration, applying the `--port` override.
fn load_config(port_override: Option<u16>) -> Result<Config, AppError> {
    let mut config = Config::load()?;
    if let Some(port) = port_override {
        config.port = port;
    }
    Ok(config)
}

/// Install the global tracing subscriber.
fn init_logging(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("sca_lab_app=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(io::stdout().is_terminal()))
        .with(filter)
        .init();
}

/// Bind and serve until signalled.
async fn cmd_serve(verbose: bool, port_override: Option<u16>) -> anyhow::Result<()> {
    let config = load_config(port_override)?;

    init_logging(verbose, &config.log_level);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e).into());
    }

    server::run(&config).await.map_err(|e| {
        error!("Server failed: {}", e);
        e
    })?;

    info!("Shutdown complete");
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(port_override: Option<u16>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SCA LAB APP - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config(port_override) {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

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
    println!("  Listen Address: {}", config.listen_addr());
    println!("  Log Level: {}", config.log_level);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
