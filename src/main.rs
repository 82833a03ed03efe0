//! Command-line interface for recsys-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed a backend with 200 users and 1000 items, reproducibly
//! recsys-seed seed \
//!   --base-url http://localhost:8000 \
//!   --namespace demo \
//!   --user-count 200 --item-count 1000 \
//!   --seed 42 --report seed-report.json
//!
//! # Dry run: generate and log every call without contacting the backend
//! RUST_LOG=info recsys-seed seed --dry-run
//!
//! # JSONL preview
//! recsys-seed generate --output-dir ./preview --seed 42
//!
//! # Effective config after overrides
//! recsys-seed show-config --config seed.yaml --item-count 50
//! ```

use clap::{Parser, Subcommand};
use recsys_seed::{render_config, run_generate, run_seed};
use seed_populate::{CommonSeedArgs, HttpSeedArgs, PreviewArgs, SeedOutcome};

#[derive(Parser)]
#[command(name = "recsys-seed")]
#[command(about = "Seed a recommendation backend with synthetic users, items and events")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate entities and upload them to the ingestion API
    Seed {
        #[command(flatten)]
        args: HttpSeedArgs,
    },

    /// Write the generated entities to JSONL files without uploading
    Generate {
        #[command(flatten)]
        args: PreviewArgs,
    },

    /// Print the effective seed config as YAML
    ShowConfig {
        #[command(flatten)]
        args: CommonSeedArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { args } => {
            let report = run_seed(args).await?;
            if let SeedOutcome::Failed { stage, message } = &report.outcome {
                anyhow::bail!("Seeding stopped in {stage} stage: {message}");
            }
            println!(
                "Seeded namespace '{}': {} event types, {} users, {} items, {} events in {:?}",
                report.namespace,
                report.event_types_registered,
                report.users_uploaded,
                report.items_uploaded,
                report.events_uploaded,
                report.total_duration
            );
        }
        Commands::Generate { args } => {
            let metrics = run_generate(args)?;
            println!(
                "Wrote {} users, {} items, {} events ({} bytes)",
                metrics.users_written,
                metrics.items_written,
                metrics.events_written,
                metrics.bytes_written
            );
        }
        Commands::ShowConfig { args } => {
            print!("{}", render_config(&args)?);
        }
    }

    Ok(())
}
