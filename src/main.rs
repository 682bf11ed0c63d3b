//! Catalog API binary: serve the HTTP API or manage the schema.

use catalog_api::{schema, seed, AppConfig, AppState};
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-api", version, about = "Product and category catalog CRUD API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Create the catalog tables if they do not exist.
    Create,
    /// Drop the catalog tables.
    Drop,
    /// Insert fixed sample rows for manual testing.
    Seed,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Create => {
            let pool = connect(&config).await?;
            schema::create_tables(&pool).await?;
            println!("Tables created");
            Ok(())
        }
        Command::Drop => {
            let pool = connect(&config).await?;
            schema::drop_tables(&pool).await?;
            println!("Tables dropped");
            Ok(())
        }
        Command::Seed => {
            let pool = connect(&config).await?;
            seed::seed(&pool).await?;
            println!("Tables seeded");
            Ok(())
        }
    }
}

async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    schema::ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    schema::create_tables(&pool).await?;

    let state = AppState {
        pool,
        update_policy: config.update_policy,
    };
    let app = catalog_api::app(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::parse_from(["catalog-api"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_schema_subcommands() {
        assert!(matches!(
            Cli::parse_from(["catalog-api", "create"]).command,
            Some(Command::Create)
        ));
        assert!(matches!(
            Cli::parse_from(["catalog-api", "drop"]).command,
            Some(Command::Drop)
        ));
        assert!(matches!(
            Cli::parse_from(["catalog-api", "seed"]).command,
            Some(Command::Seed)
        ));
    }
}
