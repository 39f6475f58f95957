use anyhow::Result;
use clap::{Parser, Subcommand};
use mood_core::TimeRange;
use mood_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mood")]
#[command(about = "Mood journal CLI - analytics over exported mood entries", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/mood-journal/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize entries of an export for a time range
    Report {
        /// JSON export to read
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// week, month or year (defaults to journal.default_range)
        #[arg(long)]
        range: Option<TimeRange>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show daily moods, activity correlations and the best time of day
    Trends {
        /// JSON export to read
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Print the insights as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the emotion and activity catalogs
    Catalog,
    /// Print the effective configuration
    Config {
        /// Config file to show (overrides --config)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_service(path: Option<PathBuf>) -> Result<ConfigService> {
    Ok(match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report { file, range, json } => {
            let config = config_service(cli.config)?.get_config()?;
            commands::report::run(&file, range, json, config).await?
        }
        Commands::Trends { file, json } => {
            let config = config_service(cli.config)?.get_config()?;
            commands::trends::run(&file, json, config).await?
        }
        Commands::Catalog => commands::catalog::run(),
        Commands::Config { path } => {
            commands::config::run(&config_service(path.or(cli.config))?)?
        }
    }

    Ok(())
}
