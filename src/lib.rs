//! recsys-seed library
//!
//! Seeds a recommendation backend with synthetic users, items and behavioral
//! events so its ranking and popularity features can be exercised without
//! production traffic.
//!
//! # Crates
//!
//! - `seed_core` - data model and the YAML seed config
//! - `seed_generator` - weighted sampling and entity builders over an injected RNG
//! - `ingest_client` - the `IngestSink` seam, HTTP client and dry-run sink
//! - `seed_populate` - the staged, chunked upload orchestrator
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed the default namespace on a local backend
//! recsys-seed seed --base-url http://localhost:8000 --seed 42
//!
//! # Exercise the whole pipeline without network calls
//! recsys-seed seed --dry-run --user-count 10 --item-count 5
//!
//! # Write users.jsonl, items.jsonl and events.jsonl for inspection
//! recsys-seed generate --output-dir ./preview --config seed.yaml
//!
//! # Print the effective config
//! recsys-seed show-config --config seed.yaml --namespace staging
//! ```

pub mod commands;

pub use commands::{render_config, run_generate, run_seed, write_report};
