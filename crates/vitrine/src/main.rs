//! Vitrine CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod store;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Vitrine storefront renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a site directory to static HTML
    Render {
        /// Site directory (settings.json, products.json, pages/)
        site_dir: PathBuf,

        /// Output directory for rendered .html files
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            site_dir,
            output_dir,
        } => {
            let summary = commands::render::execute(&site_dir, &output_dir)?;
            eprintln!(
                "Rendered {} pages: {} succeeded, {} failed",
                summary.succeeded + summary.failed,
                summary.succeeded,
                summary.failed
            );
            if summary.failed > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
