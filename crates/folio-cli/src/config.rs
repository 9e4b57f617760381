//! Configuration resolution for the CLI.
//!
//! The CLI reads the same JSON payload the front-end fetches at startup, so a
//! deployed `config.json` can be pointed at directly.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use folio_core::SearchConfig;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Configuration file name inside the platform config directory
const CONFIG_FILENAME: &str = "config.json";

/// Environment variable naming a configuration file
const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Environment variables read when no configuration file is given.
/// These are the same names the deploy template substitutes.
const HOST_ENV: &str = "TYPESENSE_HOST";
const PORT_ENV: &str = "TYPESENSE_PORT";
const PROTOCOL_ENV: &str = "TYPESENSE_PROTOCOL";
const PATH_ENV: &str = "TYPESENSE_PATH";
const API_KEY_ENV: &str = "TYPESENSE_API_KEY";

/// Resolves the search configuration.
///
/// Search order:
/// 1. `--config <file>`
/// 2. `$FOLIO_CONFIG`
/// 3. `TYPESENSE_HOST` / `_PORT` / `_PROTOCOL` / `_PATH` / `_API_KEY`
/// 4. `<platform config dir>/config.json`
pub fn resolve_config(custom_file: Option<&PathBuf>) -> Result<SearchConfig> {
    if let Some(path) = custom_file {
        return load_config_file(path);
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return load_config_file(Path::new(path.trim()));
        }
    }

    if let Some(config) = config_from_vars(|name| std::env::var(name).ok()) {
        return config;
    }

    let default_path = default_config_path();
    if let Some(path) = default_path.as_ref().filter(|p| p.exists()) {
        return load_config_file(path);
    }

    Err(anyhow!(
        "No search configuration found.\n\
         Searched locations:\n\
         - --config <file>\n\
         - ${} environment variable\n\
         - ${} (with {}, {}, {}, {})\n\
         - {}",
        CONFIG_ENV,
        HOST_ENV,
        PORT_ENV,
        PROTOCOL_ENV,
        PATH_ENV,
        API_KEY_ENV,
        default_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<config dir>/folio/config.json".to_string())
    ))
}

/// Reads and validates a configuration file.
pub fn load_config_file(path: &Path) -> Result<SearchConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SearchConfig::from_json(&text)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Builds a configuration from `TYPESENSE_*` variables.
///
/// Returns `None` when the host variable is unset, so resolution moves on.
fn config_from_vars<F>(lookup: F) -> Option<Result<SearchConfig>>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup(HOST_ENV).filter(|h| !h.trim().is_empty())?;

    let payload = json!({
        "nodes": [{
            "host": host,
            "port": lookup(PORT_ENV).unwrap_or_else(|| "8108".to_string()),
            "protocol": lookup(PROTOCOL_ENV).unwrap_or_else(|| "http".to_string()),
            "path": lookup(PATH_ENV).unwrap_or_default(),
        }],
        "apiKey": lookup(API_KEY_ENV).unwrap_or_default(),
    });

    Some(
        SearchConfig::from_json(&payload.to_string())
            .context("Invalid TYPESENSE_* environment configuration"),
    )
}

/// `<platform config dir>/config.json`
///
/// - macOS: `~/Library/Application Support/org.folio.Folio/`
/// - Linux: `~/.config/folio/`
/// - Windows: `%APPDATA%\folio\Folio\config\`
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "folio", "Folio").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
