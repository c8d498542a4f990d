//! CLI administration tool for shortlink.
//!
//! Creates and looks up short links and checks storage health without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Print the target of a code
//! cargo run --bin admin -- resolve 1C
//!
//! # Show the full record of a code
//! cargo run --bin admin -- info 1C
//!
//! # Check storage connectivity
//! cargo run --bin admin -- db check
//! ```
//!
//! # Configuration
//!
//! Uses the same environment variables (or `--config` file) as the server.

use shortlink::application::services::LinkService;
use shortlink::config;
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::{PgLinkRepository, init_storage};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::path::PathBuf;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,
    },

    /// Print the URL behind a code
    Resolve {
        /// Short code
        code: String,
    },

    /// Show the full record behind a code
    Info {
        /// Short code
        code: String,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Storage diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connectivity
    Check,

    /// Show database info (postgres backend only)
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    if let Commands::Db {
        action: DbAction::Info,
    } = cli.command
    {
        return handle_db_info(&config).await;
    }

    let storage = init_storage(&config.storage)
        .await
        .context("Failed to initialize storage")?;
    let service = LinkService::new(storage.clone(), config.base_prefix.clone());

    let outcome = match cli.command {
        Commands::Shorten { url } => shorten(&service, url).await,
        Commands::Resolve { code } => resolve(&service, &code).await,
        Commands::Info { code } => info(&service, &code).await,
        Commands::Db { .. } => check(&service).await,
    };

    storage
        .close()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to close storage: {}", e))?;

    outcome
}

/// Creates a short link, prompting for the URL when none was given.
async fn shorten(service: &LinkService, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let link = service
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short link created".green().bold());
    println!();
    println!("  Code:      {}", link.code.cyan());
    println!("  Short URL: {}", service.short_url(&link).bright_yellow().bold());
    println!("  Target:    {}", link.url.bright_white());
    println!();

    Ok(())
}

async fn resolve(service: &LinkService, code: &str) -> Result<()> {
    let link = service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", link.url);

    Ok(())
}

/// Prints every stored field of a link.
async fn info(service: &LinkService, code: &str) -> Result<()> {
    println!("{}", "ℹ️  Link Information".bright_blue().bold());
    println!();

    let link = service
        .inspect(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("  ID:        {}", link.id.to_string().bright_black());
    println!("  Code:      {}", link.code.cyan());
    println!("  Short URL: {}", service.short_url(&link).bright_yellow());
    println!("  Target:    {}", link.url.bright_white());
    println!(
        "  Created:   {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

async fn check(service: &LinkService) -> Result<()> {
    println!(
        "{}",
        format!(
            "🔍 Checking {} storage connection...",
            service.storage_backend()
        )
        .bright_blue()
    );

    service
        .storage_health()
        .await
        .map_err(|e| anyhow::anyhow!("Storage check failed: {}", e))?;

    println!("{}", "✅ Storage connection OK".green().bold());

    Ok(())
}

/// Shows server version and link count for the postgres backend.
async fn handle_db_info(config: &config::Config) -> Result<()> {
    if config.storage.backend != config::StorageBackendKind::Postgres {
        println!(
            "{}",
            format!(
                "⚠️  {} backend has no database to inspect",
                config.storage.backend
            )
            .yellow()
        );
        return Ok(());
    }

    println!("{}", "ℹ️  Database Information".bright_blue().bold());
    println!();

    let repo = PgLinkRepository::init(&config.storage.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(repo.pool())
        .await?;

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(repo.pool())
        .await?;

    println!("  PostgreSQL: {}", version.bright_white());
    println!(
        "  Database:   {}",
        config.storage.database.display_url().bright_black()
    );
    println!(
        "  Links:      {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    repo.close()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to close storage: {}", e))?;

    Ok(())
}
