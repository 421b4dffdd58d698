mod collect;
mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::collect::CollectOptions;
use crate::export::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "placescout")]
#[command(about = "Collect places of interest around a point and export them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every enabled category and write the results
    Collect {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Output file (defaults to `{output_dir}/info-turismo.{json|pdf|txt}`)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Run a single category by label, even if it is disabled
        #[arg(long)]
        category: Option<String>,
        /// Skip encyclopedia description lookups
        #[arg(long)]
        no_descriptions: bool,
    },
    /// List the configured categories
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("placescout: no command given; run `placescout --help` for usage");
        return Ok(());
    };

    let config = placescout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match command {
        Commands::Collect {
            format,
            output,
            category,
            no_descriptions,
        } => {
            collect::run_collect(
                &config,
                CollectOptions {
                    format,
                    output,
                    category,
                    descriptions: !no_descriptions,
                },
            )
            .await?;
        }
        Commands::Categories => collect::run_categories(&config)?,
    }

    Ok(())
}
