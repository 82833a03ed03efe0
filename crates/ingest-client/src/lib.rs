//! Ingestion client for the recsys seeding pipeline.
//!
//! The backend exposes four ingestion endpoints, each taking a
//! `{ namespace, <entities> }` JSON envelope:
//!
//! | Operation            | Endpoint                     |
//! |----------------------|------------------------------|
//! | upsert event types   | `POST /v1/event-types:upsert` |
//! | upsert users         | `POST /v1/users:upsert`       |
//! | upsert items         | `POST /v1/items:upsert`       |
//! | submit events        | `POST /v1/events:batch`       |
//!
//! [`IngestSink`] abstracts over them so the orchestrator can run against
//! the real backend ([`HttpIngestClient`]), nothing at all ([`DryRunSink`]),
//! or a test double.

pub mod dry_run;
pub mod envelope;
pub mod error;
pub mod http;
pub mod sink;

// Re-exports for convenience
pub use dry_run::{DryRunSink, DryRunTotals};
pub use envelope::{
    EventTypeUpsert, EventTypesUpsertRequest, EventsBatchRequest, ItemsUpsertRequest,
    UsersUpsertRequest,
};
pub use error::{status_message, IngestError};
pub use http::{HttpIngestClient, DEFAULT_REQUEST_TIMEOUT};
pub use sink::IngestSink;
