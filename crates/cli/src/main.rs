use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "quotebook")]
#[command(about = "Quote collection with categories, JSON import/export and remote sync", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show quotes in a category (default: the selected one)
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one random quote
    Random {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Add a quote
    Add {
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        category: String,
    },
    /// List known categories
    Categories,
    /// Select the active category ("all" clears the filter)
    Select { category: String },
    /// Write all quotes to a JSON file
    Export {
        #[arg(short, long, default_value = "quotes.json")]
        out: PathBuf,
    },
    /// Merge quotes from a JSON file
    Import { path: PathBuf },
    /// Run one reconciliation pass against the remote endpoint
    Sync,
    /// Run the HTTP API (and periodic sync when a remote URL is set)
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::List { category } => commands::quotes::run_list(&config, category).await?,
        Commands::Random { category } => commands::quotes::run_random(&config, category).await?,
        Commands::Add { text, category } => {
            commands::quotes::run_add(&config, &text, &category).await?;
        },
        Commands::Categories => commands::quotes::run_categories(&config).await?,
        Commands::Select { category } => commands::quotes::run_select(&config, &category).await?,
        Commands::Export { out } => commands::transfer::run_export(&config, &out).await?,
        Commands::Import { path } => commands::transfer::run_import(&config, &path).await?,
        Commands::Sync => commands::sync::run_sync(&config).await?,
        Commands::Serve { port, host } => commands::serve::run(config, port, host).await?,
    }

    Ok(())
}
