//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.biblio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::theme::ThemePreference;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BiblioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub page_size: Option<usize>,
    pub theme: Option<ThemePreference>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file. Absent = use the embedded catalog.
    pub path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Books revealed per "show more" step.
pub const DEFAULT_PAGE_SIZE: usize = 36;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub page_size: usize,
    pub theme: ThemePreference,
    /// `None` means the embedded catalog.
    pub catalog_path: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.biblio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".biblio").join("config.toml"))
}

/// Load config from `~/.biblio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BiblioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BiblioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BiblioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BiblioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BiblioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Biblio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# page_size = 36          # Books revealed per "show more"
# theme = "auto"          # "day", "night", or "auto" (follow the terminal)

# [catalog]
# path = "catalog.json"   # Catalog JSON file; omit to use the built-in catalog
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` and `cli_catalog` are from CLI flags (None = not specified).
pub fn resolve(
    config: &BiblioConfig,
    cli_theme: Option<ThemePreference>,
    cli_catalog: Option<&str>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → auto
    let theme = cli_theme
        .or_else(|| {
            std::env::var("BIBLIO_THEME")
                .ok()
                .and_then(|value| parse_theme(&value))
        })
        .or(config.general.theme)
        .unwrap_or_default();

    // Catalog path: CLI → env → config → embedded
    let catalog_path = cli_catalog
        .map(|s| s.to_string())
        .or_else(|| std::env::var("BIBLIO_CATALOG").ok())
        .or_else(|| config.catalog.path.clone())
        .map(PathBuf::from);

    // Page size: env → config → default; always positive
    let page_size = std::env::var("BIBLIO_PAGE_SIZE")
        .ok()
        .and_then(|value| value.parse().ok())
        .or(config.general.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);

    ResolvedConfig {
        page_size,
        theme,
        catalog_path,
    }
}

fn parse_theme(value: &str) -> Option<ThemePreference> {
    match value.to_lowercase().as_str() {
        "day" => Some(ThemePreference::Day),
        "night" => Some(ThemePreference::Night),
        "auto" => Some(ThemePreference::Auto),
        other => {
            warn!("Ignoring unrecognized BIBLIO_THEME value: {}", other);
            None
        }
    }
}
