use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::classify::DEFAULT_MIN_ICON_PX;
use crate::runtime::EngineOptions;
use crate::watch::DEFAULT_DEBOUNCE_MS;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "spendguard",
    version,
    about = "Shopping-page shame engine: detects and rewrites product images and buy buttons"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: spendguard.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a page fixture (and optional event script) through the engine
    Run {
        /// Path to a page fixture JSON file
        #[arg(long)]
        page: String,

        /// Path to a scripted-events JSON file
        #[arg(long)]
        script: Option<String>,

        /// JSONL trace output path
        #[arg(long)]
        trace: Option<String>,

        /// RNG seed for reproducible shame-image choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the active pattern catalog
    Patterns,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `spendguard.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub patterns: PatternConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Host-specific pattern extensions layered on top of the built-ins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatternConfig {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub buttons: Vec<String>,
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub host_markers: Vec<String>,
    #[serde(default)]
    pub slow_hosts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_min_icon_px")]
    pub min_icon_px: u32,

    pub seed: Option<u64>,
    pub trace: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_icon_px: DEFAULT_MIN_ICON_PX,
            seed: None,
            trace: None,
        }
    }
}

// Serde default helpers
fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}
fn default_min_icon_px() -> u32 {
    DEFAULT_MIN_ICON_PX
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("spendguard.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Built-in catalog plus the config's extensions.
pub fn build_catalog(config: &AppConfig) -> Catalog {
    let mut catalog = Catalog::builtin();
    catalog.extend(
        &config.patterns.images,
        &config.patterns.buttons,
        &config.patterns.phrases,
        &config.patterns.host_markers,
        &config.patterns.slow_hosts,
    );
    catalog
}

/// Engine options from config, with CLI flags taking precedence.
pub fn build_options(
    config: &AppConfig,
    seed: Option<u64>,
    trace: Option<&str>,
) -> EngineOptions {
    EngineOptions {
        debounce_ms: config.engine.debounce_ms,
        min_icon_px: config.engine.min_icon_px,
        seed: seed.or(config.engine.seed),
        trace_path: trace.map(str::to_string).or_else(|| config.engine.trace.clone()),
    }
}
