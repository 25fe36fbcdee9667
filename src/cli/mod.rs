//! Command-line interface for the video player.
//!
//! Without a subcommand the interactive console starts. The other
//! subcommands are one-shot views over a freshly loaded catalog.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::ResolvedConfig;
use crate::core::SessionController;
use crate::library::{load_catalog, source_for_path};

pub mod console;
pub mod render;

pub use console::{Command, CommandError, Console, Reply};

/// video-player - Single-user video playback console
#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file (pipe-delimited .txt or .json)
    #[arg(long, global = true, env = "VIDEO_PLAYER_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive console (default)
    Console,

    /// List every video in the catalog
    Videos {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how many videos are in the catalog
    Count,

    /// Search video titles
    Search {
        /// Search term
        term: String,

        /// Match tags instead of titles
        #[arg(short, long)]
        tag: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self, config: ResolvedConfig) -> Result<()> {
        let config = config.with_catalog(self.catalog);

        match self.command.unwrap_or(Commands::Console) {
            Commands::Console => run_console(&config).await,
            Commands::Videos { json } => list_videos(&config, json).await,
            Commands::Count => count_videos(&config).await,
            Commands::Search { term, tag } => search_videos(&config, &term, tag).await,
            Commands::Config => show_config(&config),
        }
    }
}

/// Load the catalog and start an idle session over it
pub async fn open_session(config: &ResolvedConfig) -> Result<SessionController> {
    let source = source_for_path(&config.catalog);
    let catalog = load_catalog(source.as_ref())
        .await
        .with_context(|| format!("Failed to load video catalog: {}", config.catalog.display()))?;

    info!(videos = catalog.len(), "Catalog loaded");
    Ok(SessionController::new(Arc::new(catalog)))
}

async fn run_console(config: &ResolvedConfig) -> Result<()> {
    let session = open_session(config).await?;
    let console = Console::new(session, config.offer_search_selection);
    console::run(console, &config.prompt).await
}

async fn list_videos(config: &ResolvedConfig, json: bool) -> Result<()> {
    let session = open_session(config).await?;
    let videos = session.show_all_videos();

    if json {
        println!("{}", serde_json::to_string_pretty(&videos)?);
    } else {
        for line in render::all_videos(&videos) {
            println!("{}", line);
        }
    }

    Ok(())
}

async fn count_videos(config: &ResolvedConfig) -> Result<()> {
    let session = open_session(config).await?;
    for line in render::number_of_videos(session.number_of_videos()) {
        println!("{}", line);
    }
    Ok(())
}

async fn search_videos(config: &ResolvedConfig, term: &str, by_tag: bool) -> Result<()> {
    let session = open_session(config).await?;
    let result = if by_tag {
        session.search_by_tag(term)
    } else {
        session.search(term)
    };

    for line in render::search_results(&result) {
        println!("{}", line);
    }
    Ok(())
}

fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("Video Player Configuration");
    println!();
    println!(
        "Config file: {}",
        config
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Catalog:     {}", config.catalog.display());
    println!("Log filter:  {}", config.log_filter);
    println!("Prompt:      {:?}", config.prompt);
    println!(
        "Search selection: {}",
        if config.offer_search_selection {
            "enabled"
        } else {
            "disabled"
        }
    );
    Ok(())
}
