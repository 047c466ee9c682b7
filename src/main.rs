use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tributary::app::context::StoreBackend;
use tributary::app::AppContext;
use tributary::cli::{commands, Cli, Commands};
use tributary::config::validate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { options } => {
            let config = options.resolve()?;
            validate::validate(&config)?;

            let backend = StoreBackend::detect(cli.local, &cli.local_root);
            let ctx = AppContext::new(config, backend);

            let outcome = commands::sync(&ctx).await?;
            commands::publish_outputs(&outcome)?;

            if outcome.changed {
                println!(
                    "Updated {} with {} post(s) (commit {})",
                    ctx.config.filename,
                    outcome.posts_fetched,
                    outcome.commit_id.as_deref().unwrap_or("-")
                );
            } else {
                println!(
                    "{} already up to date ({} post(s) fetched)",
                    ctx.config.filename, outcome.posts_fetched
                );
            }
        }
        Commands::Render { options } => {
            let config = options.resolve()?;
            validate::validate(&config)?;

            let backend = StoreBackend::detect(true, &cli.local_root);
            let ctx = AppContext::new(config, backend);

            let block = commands::render_preview(&ctx).await?;
            println!("{}", block);
        }
        Commands::Check { options } => {
            let config = options.resolve()?;
            validate::validate(&config)?;
            println!("Configuration OK");
        }
    }

    Ok(())
}
