//! Configuration for the video player.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (`--catalog`, also read from VIDEO_PLAYER_CATALOG)
//! 2. Environment variables (VIDEO_PLAYER_LOG)
//! 3. Config file (.video-player/config.yaml)
//! 4. Defaults (./videos.txt, "> " prompt, "warn" log filter)
//!
//! Config file discovery:
//! - Searches current directory and parents for .video-player/config.yaml
//! - Falls back to ~/.video-player/config.yaml
//! - The catalog path in a config file is relative to the directory that
//!   contains `.video-player/`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_DIR: &str = ".video-player";
const CONFIG_FILE: &str = "config.yaml";

pub const DEFAULT_CATALOG: &str = "videos.txt";
pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    /// Catalog path (relative to the project root)
    pub catalog: Option<String>,
    /// tracing filter directive, e.g. "video_player=debug"
    pub log_filter: Option<String>,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsoleConfig {
    pub prompt: Option<String>,
    /// Ask for a follow-up selection after search results
    pub offer_search_selection: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path to the catalog file
    pub catalog: PathBuf,
    pub log_filter: String,
    pub prompt: String,
    pub offer_search_selection: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            offer_search_selection: true,
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Apply a command-line catalog override
    pub fn with_catalog(mut self, catalog: Option<PathBuf>) -> Self {
        if let Some(path) = catalog {
            self.catalog = path;
        }
        self
    }
}

/// Find config file by searching `start` and its parents, then `home`
fn find_config_file(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    home.map(|h| h.join(CONFIG_DIR).join(CONFIG_FILE))
        .filter(|p| p.exists())
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration starting the file search at `start`
fn load_config_from(start: &Path, home: Option<&Path>) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(config_path) = find_config_file(start, home) {
        let config = load_config_file(&config_path)?;

        // Project root is the parent of .video-player/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        if let Some(ref catalog) = config.catalog {
            resolved.catalog = resolve_path(base_dir, catalog);
        }
        if let Some(filter) = config.log_filter {
            resolved.log_filter = filter;
        }
        if let Some(prompt) = config.console.prompt {
            resolved.prompt = prompt;
        }
        if let Some(offer) = config.console.offer_search_selection {
            resolved.offer_search_selection = offer;
        }
        resolved.config_file = Some(config_path);
    }

    if let Ok(filter) = std::env::var("VIDEO_PLAYER_LOG") {
        resolved.log_filter = filter;
    }

    Ok(resolved)
}

/// Load configuration from all sources
pub fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    load_config_from(&cwd, dirs::home_dir().as_deref())
}
