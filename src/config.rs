use clap::Parser;
use config::{
    Config as ConfigCrate, // Builder for the layered sources
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::view::{ViewLabels, DEFAULT_CURRENCY};

const DEFAULT_PRINT_SUMMARY: bool = true;
const DEFAULT_MOUSE: bool = true;
const ENV_PREFIX: &str = "BOOTH_CART";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Every field optional so file and environment can each fill in a subset.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    floor_file: Option<PathBuf>,
    currency: Option<String>,
    print_summary: Option<bool>,
    mouse: Option<bool>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub floor_file: Option<PathBuf>,
    pub currency: String,
    pub print_summary: bool,
    pub mouse: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            floor_file: None,
            currency: DEFAULT_CURRENCY.to_string(),
            print_summary: DEFAULT_PRINT_SUMMARY,
            mouse: DEFAULT_MOUSE,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn view_labels(&self) -> ViewLabels {
        ViewLabels {
            currency: self.currency.clone(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick exhibition booths into a cart", long_about = None)]
pub struct CliArgs {
    /// Floor file listing the booths (built-in demo floor when omitted)
    pub floor_file: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Currency label shown before prices
    #[arg(long)]
    pub currency: Option<String>,

    /// Print the cart summary to stdout on exit
    #[arg(long)]
    pub print_summary: Option<bool>,

    /// Capture mouse clicks on controls
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "booth-cart").map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).try_parsing(true);
    // Unreadable environment is treated like an empty one.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

// Precedence: args > overrides (env) > file > defaults.
fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        debug!(path = %path.display(), "config file candidate");
        // An explicit --config must exist; the platform default is optional.
        builder = builder.add_source(File::from(path.clone()).required(args.config.is_some()));
    }

    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            builder = builder.set_override(key.as_str(), value)?;
        }
    }

    let loaded: FileConfig = builder.build()?.try_deserialize()?;

    let config = AppConfig {
        floor_file: args.floor_file.clone().or(loaded.floor_file),
        currency: args
            .currency
            .clone()
            .or(loaded.currency)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        print_summary: args
            .print_summary
            .or(loaded.print_summary)
            .unwrap_or(DEFAULT_PRINT_SUMMARY),
        mouse: args.mouse.or(loaded.mouse).unwrap_or(DEFAULT_MOUSE),
        log_file: args.log_file.clone().or(loaded.log_file),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let currency = config.currency.trim();
    if currency.is_empty() {
        return Err(ConfigError::ValidationError(
            "currency label must not be empty".to_string(),
        ));
    }
    if currency.chars().any(char::is_control) {
        return Err(ConfigError::ValidationError(format!(
            "currency label contains control characters: {:?}",
            config.currency
        )));
    }
    Ok(())
}
