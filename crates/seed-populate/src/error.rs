//! Error types for the seeding orchestrator.

use crate::progress::SeedStage;
use ingest_client::IngestError;
use seed_generator::GeneratorError;
use thiserror::Error;

/// Errors that abort a seeding run with `Err`.
///
/// Upload rejections are not errors at this level: they end the run with a
/// failed [`SeedOutcome`](crate::SeedOutcome) instead.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid argument in {stage} stage: {source}")]
    InvalidArgument {
        stage: SeedStage,
        source: GeneratorError,
    },
}

/// Failure of a single stage.
#[derive(Error, Debug)]
pub(crate) enum StageError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Upload(#[from] IngestError),
}

/// Errors that can occur while writing a JSONL preview.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}
