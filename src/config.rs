//! Configuration file handling (`.govgap.toml`).
//!
//! The config is discovered by walking up from the working directory,
//! parsed once and cached. Only presentation defaults and the target
//! ceiling are configurable; the tier thresholds are fixed behavior.

use crate::core::types::DEFAULT_TARGET_LEVEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GovgapConfig {
    /// Target maturity settings
    #[serde(default)]
    pub target: TargetConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target maturity ceiling applied to every domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Ceiling on the 0-5 scale (default 5.0)
    #[serde(default = "default_target_level")]
    pub level: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            level: default_target_level(),
        }
    }
}

fn default_target_level() -> f64 {
    DEFAULT_TARGET_LEVEL
}

/// Output defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format: terminal, json or markdown
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

pub(crate) fn parse_and_validate_config(contents: &str) -> Result<GovgapConfig, String> {
    let config =
        toml::from_str::<GovgapConfig>(contents).map_err(|e| format!("Invalid config: {e}"))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GovgapConfig) -> Result<(), String> {
    if !(0.0..=5.0).contains(&config.target.level) {
        return Err(format!(
            "target.level must be between 0.0 and 5.0, got {}",
            config.target.level
        ));
    }
    match config.output.default_format.as_str() {
        "terminal" | "json" | "markdown" => Ok(()),
        other => Err(format!(
            "output.default_format must be terminal, json or markdown, got \"{other}\""
        )),
    }
}

fn try_load_config_from_path(config_path: &Path) -> Option<GovgapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring {}: {e}. Using defaults.", config_path.display());
            None
        }
    }
}

/// Log file read errors; "not found" is the normal case while walking
/// ancestors and stays silent
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Load configuration by searching from the current directory upward.
/// Falls back to defaults when no `.govgap.toml` is found.
pub fn load_config() -> GovgapConfig {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            return GovgapConfig::default();
        }
    };

    cwd.ancestors()
        .map(|dir| dir.join(".govgap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No config found. Using default config.");
            GovgapConfig::default()
        })
}

static CONFIG: OnceLock<GovgapConfig> = OnceLock::new();

/// Cached configuration accessor
pub fn get_config() -> &'static GovgapConfig {
    CONFIG.get_or_init(load_config)
}
