//! CLI administration tool for short-url-service.
//!
//! Manages URL mappings directly against the database, using the same
//! validation rules as the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all mappings
//! cargo run --bin admin -- urls list
//!
//! # Create a mapping
//! cargo run --bin admin -- urls create rust https://www.rust-lang.org
//!
//! # Delete a mapping
//! cargo run --bin admin -- urls delete rust
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `BASE_SHORT_URL` (required for `urls` commands): short URL prefix

use short_url_service::config::{Config, mask_connection_string};
use short_url_service::infrastructure::persistence::PgUrlMappingRepository;
use short_url_service::prelude::{MappingSelector, ShortenOutcome, UrlMappingService};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage URL mappings
    Urls {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List all mappings
    List,

    /// Create a mapping
    Create {
        /// Short name (letters, digits and hyphens)
        short_name: String,

        /// Destination URL (http or https)
        long_url: String,
    },

    /// Delete a mapping
    Delete {
        /// Short name of the mapping to delete
        short_name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Urls { action } => handle_url_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches mapping management commands.
async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let base_short_url = std::env::var("BASE_SHORT_URL").context("BASE_SHORT_URL must be set")?;
    let repository = Arc::new(PgUrlMappingRepository::new(Arc::new(pool.clone())));
    let service = UrlMappingService::new(repository, base_short_url);

    match action {
        UrlAction::List => list_urls(&service).await?,
        UrlAction::Create {
            short_name,
            long_url,
        } => create_url(&service, &short_name, &long_url).await?,
        UrlAction::Delete { short_name, yes } => delete_url(&service, short_name, yes).await?,
    }

    Ok(())
}

/// Prints every mapping as a table.
///
/// ```text
///   ID    Short URL                                Long URL
///   ───────────────────────────────────────────────────────────────────
///   1     https://s.example.com/rust               https://www.rust-lang.org
/// ```
async fn list_urls(service: &UrlMappingService) -> Result<()> {
    println!("{}", "URL mappings".bright_blue().bold());
    println!();

    let mappings = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<40} {}",
        "ID".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<5} {:<40} {}",
            mapping.id.to_string().bright_black(),
            mapping.short_url.cyan(),
            mapping.long_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Creates a mapping with the same rules as `POST /shorten`.
async fn create_url(service: &UrlMappingService, short_name: &str, long_url: &str) -> Result<()> {
    let outcome = service
        .shorten(long_url, short_name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create mapping: {}", e))?;

    match outcome {
        ShortenOutcome::Created(mapping) => {
            println!("{}", "Mapping created".green().bold());
            println!("  {} -> {}", mapping.short_url.cyan(), mapping.long_url);
        }
        ShortenOutcome::AlreadyExists { short_url } => {
            println!(
                "{} {}",
                "Short name already exists:".yellow(),
                short_url.cyan()
            );
        }
    }

    Ok(())
}

/// Deletes a mapping by short name after confirmation.
async fn delete_url(service: &UrlMappingService, short_name: String, yes: bool) -> Result<()> {
    let mapping = service
        .resolve(&short_name)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Short URL: {}", mapping.short_url.cyan());
    println!("  Long URL:  {}", mapping.long_url);
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_url(MappingSelector::ShortName(short_name))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete mapping: {}", e))?;

    println!("{}", "Mapping deleted".green().bold());
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
                .fetch_one(pool)
                .await
                .context("Failed to count mappings (have migrations run?)")?;

            println!("{}", "Database info".bright_blue().bold());
            println!("  Version:  {}", version.bright_black());
            println!("  Mappings: {}", mappings.to_string().bright_white().bold());
        }
    }

    Ok(())
}
