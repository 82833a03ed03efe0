//! Seeding integration tests.
//!
//! These tests drive the full pipeline without a real backend:
//! 1. Dry-run seeding through the `seed` command handler
//! 2. HTTP seeding against a throwaway local server that records requests
//! 3. JSONL preview output into a temp directory

mod dry_run;
mod http_ingest;
mod jsonl_preview;

use seed_populate::{CommonSeedArgs, HttpSeedArgs, EVENT_CHUNK_SIZE, ITEM_CHUNK_SIZE};
use std::path::PathBuf;

pub fn fixture_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/seed_config.yaml")
}

pub fn fixture_args() -> CommonSeedArgs {
    CommonSeedArgs {
        config: Some(fixture_config()),
        ..CommonSeedArgs::default()
    }
}

pub fn seed_args(base_url: &str, dry_run: bool) -> HttpSeedArgs {
    HttpSeedArgs {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
        item_chunk_size: ITEM_CHUNK_SIZE,
        event_chunk_size: EVENT_CHUNK_SIZE,
        dry_run,
        report: None,
        common: fixture_args(),
    }
}
