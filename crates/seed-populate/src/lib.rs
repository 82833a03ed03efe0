//! Seeding orchestrator for the recommendation backend.
//!
//! Runs four strictly sequential stages against an
//! [`IngestSink`](ingest_client::IngestSink):
//!
//! ```text
//! register event types -> users (1 call) -> items (chunks of 200) -> events (chunks of 1000)
//! ```
//!
//! Progress is reported as structured [`SeedProgress`] events to a
//! [`SeedObserver`]; the run ends with a [`SeedReport`].
//!
//! # Example
//!
//! ```ignore
//! use ingest_client::DryRunSink;
//! use seed_generator::DataGenerator;
//! use seed_populate::{SeedPopulator, TracingObserver};
//!
//! let config = seed_core::SeedConfig::default();
//! let generator = DataGenerator::from_seed_option(config.seed);
//! let mut populator = SeedPopulator::new(DryRunSink::new(), config, generator);
//! let report = populator.run(&mut TracingObserver).await?;
//! println!("{} entities uploaded", report.entities_uploaded());
//! ```

pub mod args;
pub mod error;
pub mod populator;
pub mod preview;
pub mod progress;

pub use args::{CommonSeedArgs, HttpSeedArgs, PreviewArgs};
pub use error::{PreviewError, SeedError};
pub use populator::{SeedOutcome, SeedPopulator, SeedReport, EVENT_CHUNK_SIZE, ITEM_CHUNK_SIZE};
pub use preview::{write_preview, PreviewMetrics};
pub use progress::{SeedObserver, SeedProgress, SeedStage, TracingObserver};
