//! Generate command handler (JSONL preview).

use anyhow::Context;
use seed_generator::DataGenerator;
use seed_populate::{write_preview, PreviewArgs, PreviewMetrics};

/// Build the entities a seed run would upload and write them as JSONL.
pub fn run_generate(args: PreviewArgs) -> anyhow::Result<PreviewMetrics> {
    let config = args
        .common
        .load_config()
        .context("Failed to load seed config")?;

    let mut generator = DataGenerator::from_seed_option(config.seed);
    let metrics = write_preview(&mut generator, &config, &args.output_dir).with_context(|| {
        format!("Failed to write JSONL preview to {:?}", args.output_dir)
    })?;

    for file in &metrics.files {
        tracing::info!("Wrote {}", file.display());
    }

    Ok(metrics)
}
