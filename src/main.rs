//! Headless host for the page router.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin (one command per line)
//!        │
//!        ▼
//!   ┌─────────┐    ┌─────────┐    ┌──────────┐    ┌─────────┐
//!   │  shell  │───▶│ history │───▶│   app    │───▶│ routing │
//!   │ command │    │  event  │    │ dispatch │    │ resolve │
//!   └─────────┘    └─────────┘    └────┬─────┘    └─────────┘
//!                                      │
//!                                      ▼
//!                                 ┌─────────┐
//!                                 │  pages  │──▶ stdout (JSON view per line)
//!                                 └─────────┘
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use page_router::config::{load_config, AppConfig};
use page_router::observability::init_logging;
use page_router::pages::PageRegistry;
use page_router::{App, Shell};

#[derive(Parser)]
#[command(name = "page-router")]
#[command(about = "Resolve navigations against the meme generator's route table", long_about = None)]
struct Cli {
    /// TOML configuration file; the built-in route table is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the route table and exit.
    #[arg(long)]
    routes: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path, &PageRegistry::builtin())?,
        None => AppConfig::default(),
    };

    init_logging(&config.observability)?;

    tracing::info!(
        config = ?cli.config,
        routes = config.routes.len(),
        initial_path = %config.history.initial_path,
        generator = config.generator.is_some(),
        "Configuration loaded"
    );

    let pages = PageRegistry::for_config(&config)?;
    let app = App::from_config(&config, &pages)?;

    if cli.routes {
        app.write_routes(&mut io::stdout().lock())?;
        return Ok(());
    }

    let mut shell = Shell::new(app, &config.history.initial_path)?;
    shell.start().write_line(&mut io::stdout().lock())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match shell.handle_line(&line) {
                    Ok(Some(rendered)) => rendered.write_line(&mut io::stdout().lock())?,
                    Ok(None) => {}
                    Err(e) => tracing::warn!(error = %e, line = %line, "Skipping input"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    tracing::info!(entries = shell.history().len(), "Navigation input closed");
    Ok(())
}
