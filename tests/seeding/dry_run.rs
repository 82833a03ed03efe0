//! Dry-run seeding through the command handler.

use crate::seed_args;
use recsys_seed::run_seed;
use seed_populate::{SeedOutcome, SeedStage};
use tempfile::TempDir;

#[tokio::test]
async fn test_dry_run_seeds_every_stage() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("recsys_seed=info,seed_populate=debug")
        .try_init()
        .ok();

    let temp_dir = TempDir::new()?;
    let report_path = temp_dir.path().join("report.json");

    // The base URL is never contacted in dry-run mode.
    let mut args = seed_args("http://unreachable.invalid", true);
    args.report = Some(report_path.clone());

    let report = run_seed(args).await?;
    assert_eq!(report.outcome, SeedOutcome::Completed);
    assert_eq!(report.completed_stages, SeedStage::ALL.to_vec());
    assert_eq!(report.namespace, "integration");
    assert_eq!(report.event_types_registered, 2);
    assert_eq!(report.users_uploaded, 12);
    assert_eq!(report.items_uploaded, 30);
    assert!((24..=60).contains(&report.events_uploaded));
    assert_eq!(report.item_chunks, 1);
    assert_eq!(report.event_chunks, 1);

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&report_path)?)?;
    assert_eq!(written["outcome"]["status"], "completed");
    assert_eq!(written["users_uploaded"], 12);
    Ok(())
}

#[tokio::test]
async fn test_dry_run_honors_lowered_chunk_sizes() -> anyhow::Result<()> {
    let mut args = seed_args("http://localhost:8000", true);
    args.item_chunk_size = 7;
    args.event_chunk_size = 10;

    let report = run_seed(args).await?;
    // 30 items in chunks of 7.
    assert_eq!(report.item_chunks, 5);
    assert_eq!(report.event_chunks, report.events_uploaded.div_ceil(10));
    Ok(())
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_seeding() {
    let mut args = seed_args("http://localhost:8000", true);
    args.common.min_events_per_user = Some(9);
    args.common.max_events_per_user = Some(1);

    let err = run_seed(args).await.unwrap_err();
    assert!(format!("{err:#}").contains("min_events_per_user"));
}
