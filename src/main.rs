use clap::Parser;
use listing_scout::commands;
use listing_scout::config::{Cli, Commands};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    debug!("🏠 Listing Scout starting with {:?}", config);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &config).await,
        Commands::Suggest(args) => commands::suggest::execute(args, &config).await,
        Commands::History(args) => commands::history::execute(args, &config).await,
    }
}
