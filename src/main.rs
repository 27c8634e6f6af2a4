use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ember::app::AppContext;
use ember::cli::{commands, Cli, Commands};
use ember::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::List {
            kind,
            limit,
            preload,
        } => {
            let kind = commands::parse_kind(&kind)?;
            commands::list_stories(&ctx, kind, limit, false, preload).await?;
        }
        Commands::Refresh { kind, limit } => {
            let kind = commands::parse_kind(&kind)?;
            commands::list_stories(&ctx, kind, limit, true, false).await?;
        }
        Commands::Show { id } => {
            commands::show_story(&ctx, id).await?;
        }
        Commands::Open { id } => {
            commands::open_story(&ctx, id).await?;
        }
        Commands::Fav { id } => {
            commands::fav_story(&ctx, id).await?;
        }
        Commands::Unfav { id } => {
            commands::unfav_story(&ctx, id)?;
        }
        Commands::Favorites => {
            commands::list_favorites(&ctx)?;
        }
        Commands::ClearFavorites => {
            commands::clear_favorites(&ctx)?;
        }
        Commands::Export { output } => {
            commands::export_favorites(&ctx, output)?;
        }
    }

    Ok(())
}
