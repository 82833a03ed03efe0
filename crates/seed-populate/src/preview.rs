//! JSONL preview of a seeding run.
//!
//! Builds the same users, items and events a seed run would upload and
//! writes them to `users.jsonl`, `items.jsonl` and `events.jsonl`, one JSON
//! object per line. Nothing is sent to the backend.

use crate::error::PreviewError;
use rand::Rng;
use seed_core::SeedConfig;
use seed_generator::DataGenerator;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

pub const USERS_FILE: &str = "users.jsonl";
pub const ITEMS_FILE: &str = "items.jsonl";
pub const EVENTS_FILE: &str = "events.jsonl";

/// Metrics from a preview run.
#[derive(Debug, Clone, Default)]
pub struct PreviewMetrics {
    pub users_written: u64,
    pub items_written: u64,
    pub events_written: u64,
    /// Combined size of the three files.
    pub bytes_written: u64,
    pub total_duration: Duration,
    /// Files written, in generation order.
    pub files: Vec<PathBuf>,
}

impl PreviewMetrics {
    pub fn rows_written(&self) -> u64 {
        self.users_written + self.items_written + self.events_written
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Generate every collection described by `config` and write it under
/// `output_dir`, creating the directory if needed.
pub fn write_preview<R: Rng>(
    generator: &mut DataGenerator<R>,
    config: &SeedConfig,
    output_dir: &Path,
) -> Result<PreviewMetrics, PreviewError> {
    let start_time = Instant::now();
    let mut metrics = PreviewMetrics::default();
    std::fs::create_dir_all(output_dir)?;

    info!(
        "Writing JSONL preview for namespace '{}' to '{}'",
        config.namespace,
        output_dir.display()
    );

    let users = generator.users(config)?;
    let path = output_dir.join(USERS_FILE);
    metrics.bytes_written += write_jsonl(&path, &users)?;
    metrics.users_written = users.len() as u64;
    metrics.files.push(path);

    let items = generator.items(config)?;
    let path = output_dir.join(ITEMS_FILE);
    metrics.bytes_written += write_jsonl(&path, &items)?;
    metrics.items_written = items.len() as u64;
    metrics.files.push(path);

    let events = generator.events(config, &users, &items)?;
    let path = output_dir.join(EVENTS_FILE);
    metrics.bytes_written += write_jsonl(&path, &events)?;
    metrics.events_written = events.len() as u64;
    metrics.files.push(path);

    metrics.total_duration = start_time.elapsed();
    info!(
        "JSONL preview complete: {} users, {} items, {} events, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.users_written,
        metrics.items_written,
        metrics.events_written,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

/// Write `rows` as JSON Lines, returning the file size.
fn write_jsonl<T: Serialize>(path: &Path, rows: &[T]) -> Result<u64, PreviewError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    drop(writer);

    let size = std::fs::metadata(path)?.len();
    debug!("Wrote {} rows to '{}'", rows.len(), path.display());
    Ok(size)
}
