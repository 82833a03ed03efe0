//! CLI argument definitions shared by the seeding commands.

use crate::populator::{EVENT_CHUNK_SIZE, ITEM_CHUNK_SIZE};
use clap::Args;
use seed_core::{ConfigError, SeedConfig};
use std::path::PathBuf;

/// Arguments that shape what gets generated.
///
/// Every flag overrides the matching field of the config file (or of the
/// built-in defaults when no file is given).
#[derive(Args, Clone, Debug, Default)]
pub struct CommonSeedArgs {
    /// Path to seed config YAML file (built-in defaults when omitted)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Namespace to seed
    #[arg(long)]
    pub namespace: Option<String>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of users to generate
    #[arg(long)]
    pub user_count: Option<u64>,

    /// Ordinal of the first user ID
    #[arg(long)]
    pub user_start_index: Option<u64>,

    /// Number of items to generate
    #[arg(long)]
    pub item_count: Option<u64>,

    /// Minimum events per user
    #[arg(long)]
    pub min_events_per_user: Option<u64>,

    /// Maximum events per user
    #[arg(long)]
    pub max_events_per_user: Option<u64>,
}

impl CommonSeedArgs {
    /// Load the config file (or defaults), apply flag overrides and validate.
    pub fn load_config(&self) -> Result<SeedConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SeedConfig::from_file(path)?,
            None => SeedConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut SeedConfig) {
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(count) = self.user_count {
            config.user_count = count;
        }
        if let Some(index) = self.user_start_index {
            config.user_start_index = index;
        }
        if let Some(count) = self.item_count {
            config.item_count = count;
        }
        if let Some(min) = self.min_events_per_user {
            config.min_events_per_user = min;
        }
        if let Some(max) = self.max_events_per_user {
            config.max_events_per_user = max;
        }
    }
}

/// Arguments for seeding a live backend.
#[derive(Args, Clone, Debug)]
pub struct HttpSeedArgs {
    /// Base URL of the recommendation API
    #[arg(long, env = "RECSYS_BASE_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    /// Items per upsert call (at most 200)
    #[arg(long, default_value_t = ITEM_CHUNK_SIZE)]
    pub item_chunk_size: usize,

    /// Events per batch call (at most 1000)
    #[arg(long, default_value_t = EVENT_CHUNK_SIZE)]
    pub event_chunk_size: usize,

    /// Dry-run mode: generate everything and log the calls without contacting the backend
    #[arg(long)]
    pub dry_run: bool,

    /// Write the JSON seeding report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}

/// Arguments for writing a JSONL preview.
#[derive(Args, Clone, Debug)]
pub struct PreviewArgs {
    /// Output directory for users.jsonl, items.jsonl and events.jsonl
    #[arg(long, short = 'o')]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}
