mod fetch;
mod link;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "restock")]
#[command(about = "Feed tooling for the restock storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the configured product feed and print it as JSON.
    Fetch,
    /// Parse a local CSV feed file and report admitted and skipped rows.
    Validate { file: PathBuf },
    /// Print the Telegram purchase deep link for one listing.
    Link { id: String, title: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch => fetch::run().await,
        Commands::Validate { file } => validate::run(&file),
        Commands::Link { id, title } => link::run(&id, &title),
    }
}
