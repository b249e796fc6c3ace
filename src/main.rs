// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use site_robots::app::{create_router, AppState, VERSION};
use site_robots::models::site::SiteMetadata;
use site_robots::services::robots::{is_allowed, render_robots_txt, robots};
use std::env;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Parser, Debug)]
#[command(name = "site-robots", version = VERSION, about = "Serve the site's robots.txt")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Serve /robots.txt over HTTP (default)
    Serve {
        /// Address to listen on, falls back to BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the crawl policy to stdout
    Render {
        #[arg(long, value_enum, default_value_t = Format::Txt)]
        format: Format,
    },
    /// Check whether a crawler may fetch a path
    Check {
        #[arg(long)]
        agent: String,
        #[arg(long)]
        path: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Txt,
    Json,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so `render` output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let site = SiteMetadata::from_env()?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(site, bind).await,
        Command::Render { format } => {
            print!("{}", render_output(&site, format)?);
            Ok(())
        }
        Command::Check { agent, path } => {
            println!("{}", check_output(&site, &agent, &path)?);
            Ok(())
        }
    }
}

fn render_output(site: &SiteMetadata, format: Format) -> Result<String> {
    let policy = robots(site);
    match format {
        Format::Txt => Ok(render_robots_txt(&policy)),
        Format::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&policy)?)),
    }
}

fn check_output(site: &SiteMetadata, agent: &str, path: &str) -> Result<&'static str> {
    let allowed = is_allowed(&robots(site), agent, path)?;
    Ok(if allowed { "allowed" } else { "disallowed" })
}

async fn serve(site: SiteMetadata, bind: Option<String>) -> Result<()> {
    let bind = bind
        .or_else(|| env::var("BIND_ADDR").ok())
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address: {bind}"))?;

    tracing::info!(site_url = %site.site_url, "Loaded site metadata");

    let app = create_router(AppState::new(site));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("site-robots v{} listening on {}", VERSION, addr);

    axum::serve(listener, app).await.context("Server error")
}
