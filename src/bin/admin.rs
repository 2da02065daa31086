//! CLI administration tool for snip.
//!
//! Runs link operations directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Show statistics for a short code (does not count a click)
//! cargo run --bin admin -- stats aB3xYz
//!
//! # List the most recent links
//! cargo run --bin admin -- recent --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Uses the same configuration as the server (`DATABASE_URL`, `DB_*`,
//! `CODE_MAX_ATTEMPTS`, `PUBLIC_BASE_URL`), including `.env` files.

use snip::application::services::LinkService;
use snip::config::{self, Config, mask_connection_string};
use snip::domain::entities::Link;
use snip::domain::repositories::LinkRepository;
use snip::infrastructure::persistence;
use snip::utils::url_validator::validate_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing snip.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL (returns the existing link if already shortened)
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Show statistics for a short code
    Stats {
        /// Short code
        code: String,
    },

    /// List the most recently created links
    Recent {
        /// Number of links to show
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and count stored links
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    let repository = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let service = LinkService::new(repository).with_max_attempts(config.code_max_attempts);

    match cli.command {
        Commands::Shorten { url } => shorten(&service, &config, &url).await?,
        Commands::Stats { code } => stats(&service, &code).await?,
        Commands::Recent { limit } => recent(&service, &config, limit).await?,
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&service, &config).await?,
        },
    }

    Ok(())
}

/// Prefix for printed short URLs.
fn base_url(config: &Config) -> String {
    let base = config
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.listen_addr));

    if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    }
}

async fn shorten(
    service: &LinkService<dyn LinkRepository>,
    config: &Config,
    url: &str,
) -> Result<()> {
    let url = validate_url(url).map_err(|e| anyhow::anyhow!("{}", e))?;

    let shortened = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    if shortened.created {
        println!("{}", "✅ Short link created".green().bold());
    } else {
        println!("{}", "ℹ️  URL was already shortened".yellow().bold());
    }
    println!();
    print_link(&shortened.link, &base_url(config));
    println!();

    Ok(())
}

async fn stats(service: &LinkService<dyn LinkRepository>, code: &str) -> Result<()> {
    let link = match service.stats(code).await {
        Ok(link) => link,
        Err(e) if e.is_not_found() => {
            println!("{} {}", "❌ No link with code".red(), code.bright_white());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("{}", "📊 Link statistics".bright_blue().bold());
    println!();
    println!("  Code:     {}", link.short_code.cyan());
    println!("  URL:      {}", link.original_url.bright_white());
    println!(
        "  Clicks:   {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:  {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Lists recent links as a table.
///
/// # Output Format
///
/// ```text
/// 🕒 Recent links
///
///   Code    Clicks  Created           URL
///   ─────────────────────────────────────────────────────────────
///   aB3xYz  12      2026-01-15 10:30  https://example.com/a
/// ```
async fn recent(
    service: &LinkService<dyn LinkRepository>,
    config: &Config,
    limit: u32,
) -> Result<()> {
    println!("{}", "🕒 Recent links".bright_blue().bold());
    println!();

    let links = service
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<7} {:<17} {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!(
        "  Short URLs: {}{}",
        base_url(config).bright_black(),
        "<code>".bright_black()
    );
    println!();

    Ok(())
}

async fn db_check(service: &LinkService<dyn LinkRepository>, config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());
    println!(
        "  Database: {}",
        mask_connection_string(&config.database_url).bright_white()
    );

    service
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  Links: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

fn print_link(link: &Link, base: &str) {
    println!(
        "  Short URL: {}{}",
        base.bright_yellow(),
        link.short_code.bright_yellow().bold()
    );
    println!("  Code:      {}", link.short_code.cyan());
    println!("  URL:       {}", link.original_url.bright_white());
    println!("  Clicks:    {}", link.clicks.to_string().bright_green());
}
