use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cookenu_api::config::{AppConfig, Environment};
use cookenu_api::database::{DatabaseManager, Storage};
use cookenu_api::AppState;

#[derive(Parser)]
#[command(name = "cookenu-api")]
#[command(about = "Recipe-sharing API server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Address to bind, overrides HOST")]
        host: Option<String>,
        #[arg(long, help = "Port to listen on, overrides PORT")]
        port: Option<u16>,
    },

    #[command(about = "Create the database tables and exit")]
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Commands::Migrate => migrate(config).await,
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;
    tracing::info!("Starting Cookenu API in {:?} mode", config.environment);

    let storage = connect_storage(&config).await?;
    let state = AppState::from_config(&config, storage).context("failed to build authenticator")?;
    let app = cookenu_api::app(state, config.security.enable_cors);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Cookenu API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn migrate(config: AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::migrate(&pool).await.context("migration failed")?;
    pool.close().await;
    Ok(())
}

async fn connect_storage(config: &AppConfig) -> anyhow::Result<Storage> {
    if config.database.url.is_none() {
        if config.environment == Environment::Production {
            anyhow::bail!("DATABASE_URL is required in production");
        }
        tracing::warn!("DATABASE_URL not set; using in-memory storage, data is lost on restart");
        return Ok(Storage::memory());
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::migrate(&pool).await.context("migration failed")?;
    Ok(Storage::Postgres(pool))
}
