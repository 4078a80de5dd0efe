use clap::Parser;
use nutrimatch::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nutrimatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Recommend {
            nutrition,
            ingredients,
            neighbors,
            distances,
            dataset,
        } => {
            commands::recommend(
                &settings,
                nutrition,
                ingredients,
                neighbors,
                distances,
                dataset,
            )?;
        }
        Commands::Stats { dataset } => {
            commands::stats(&settings, dataset)?;
        }
        Commands::Validate { path } => {
            commands::validate(&path)?;
        }
    }

    Ok(())
}
