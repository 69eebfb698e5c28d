use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use presence_analyzer::api::state::AppState;
use presence_analyzer::config::AppConfig;
use presence_analyzer::models::UserId;
use presence_analyzer::query::PresenceQueries;
use presence_analyzer::storage::{CachedStore, CsvSource};

#[derive(Parser)]
#[command(name = "presence-analyzer")]
#[command(about = "Employee presence statistics by weekday")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Presence CSV path (overrides the config file)
    #[arg(long)]
    data_csv: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Parse the presence source once and print reports
    Inspect {
        /// User to report on
        #[arg(long)]
        user: Option<UserId>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(path) = cli.data_csv {
        config.data_csv = path;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting presence-analyzer v{}", env!("CARGO_PKG_VERSION"));

    let source = CsvSource::new(&config.data_csv);
    tracing::info!("Presence source: {:?}", source.path());
    let cache = CachedStore::new(source, config.cache.validity_period()?);
    tracing::info!("Presence cache validity: {:?}", cache.validity());
    let queries = PresenceQueries::new(Arc::new(cache));

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            let state = AppState {
                queries,
                static_dir: Arc::new(config.static_dir),
            };
            let app = presence_analyzer::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Inspect { user } => {
            let data = queries.get_data()?;
            tracing::info!(
                "{} users, {} presence entries",
                data.user_count(),
                data.entry_count()
            );

            match user {
                Some(user_id) => {
                    let report = json!({
                        "user_id": user_id,
                        "mean_time_weekday": queries.mean_time_by_weekday(user_id)?,
                        "presence_weekday": queries.total_time_by_weekday(user_id)?,
                        "presence_start_end": queries.start_end_by_weekday(user_id)?,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                None => {
                    println!("{}", serde_json::to_string_pretty(&queries.users()?)?);
                }
            }
        }
    }

    Ok(())
}
