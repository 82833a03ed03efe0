//! Seed command handler.

use anyhow::Context;
use ingest_client::{DryRunSink, HttpIngestClient, IngestSink};
use seed_core::SeedConfig;
use seed_generator::DataGenerator;
use seed_populate::{HttpSeedArgs, SeedPopulator, SeedReport, TracingObserver};
use std::path::Path;
use std::time::Duration;

/// Run the seed command: generate entities and upload them stage by stage.
///
/// Returns the report of the run; a rejected upload is a failed outcome
/// in the report, not an `Err`.
pub async fn run_seed(args: HttpSeedArgs) -> anyhow::Result<SeedReport> {
    let config = args
        .common
        .load_config()
        .context("Failed to load seed config")?;

    let generator = DataGenerator::from_seed_option(config.seed);
    match config.seed {
        Some(seed) => tracing::info!("Using seed {} for generation", seed),
        None => tracing::info!("No seed given, generating from entropy"),
    }

    let report = if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would seed namespace '{}' at {}",
            config.namespace,
            args.base_url
        );
        let (report, sink) = execute(DryRunSink::new(), config, generator, &args).await?;
        let totals = sink.totals();
        tracing::info!(
            "[DRY-RUN] {} calls: {} event types, {} users, {} items, {} events",
            totals.calls,
            totals.event_types,
            totals.users,
            totals.items,
            totals.events
        );
        report
    } else {
        let client = HttpIngestClient::with_timeout(
            &args.base_url,
            Duration::from_secs(args.request_timeout_secs),
        )
        .with_context(|| format!("Failed to create client for {}", args.base_url))?;
        tracing::info!("Seeding namespace '{}' at {}", config.namespace, client.base_url());
        execute(client, config, generator, &args).await?.0
    };

    if let Some(path) = &args.report {
        write_report(&report, path)?;
    }

    Ok(report)
}

async fn execute<S: IngestSink>(
    sink: S,
    config: SeedConfig,
    generator: DataGenerator,
    args: &HttpSeedArgs,
) -> anyhow::Result<(SeedReport, S)> {
    let mut populator = SeedPopulator::new(sink, config, generator)
        .with_item_chunk_size(args.item_chunk_size)
        .with_event_chunk_size(args.event_chunk_size);

    let report = populator
        .run(&mut TracingObserver)
        .await
        .context("Seeding aborted")?;

    Ok((report, populator.into_sink()))
}

/// Write the report as pretty JSON.
pub fn write_report(report: &SeedReport, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {path:?}"))?;
    tracing::info!("Wrote seeding report to {:?}", path);
    Ok(())
}
