//! IngestSink trait definition.

use crate::envelope::{
    EventTypesUpsertRequest, EventsBatchRequest, ItemsUpsertRequest, UsersUpsertRequest,
};
use crate::error::IngestError;

/// Trait for uploading seeding data to the recommendation backend.
///
/// Each call either succeeds or returns the rejection; implementations do
/// not retry. Callers decide chunk sizes before calling.
///
/// # Usage Pattern
///
/// ```ignore
/// pub async fn upload<S: IngestSink>(sink: &S, namespace: &str, users: &[User]) -> Result<(), IngestError> {
///     sink.upsert_users(&UsersUpsertRequest { namespace, users }).await
/// }
/// ```
#[async_trait::async_trait]
pub trait IngestSink: Send + Sync {
    /// Register (or update) event type configuration.
    async fn upsert_event_types(
        &self,
        request: &EventTypesUpsertRequest<'_>,
    ) -> Result<(), IngestError>;

    /// Upsert a batch of users.
    async fn upsert_users(&self, request: &UsersUpsertRequest<'_>) -> Result<(), IngestError>;

    /// Upsert a batch of items.
    async fn upsert_items(&self, request: &ItemsUpsertRequest<'_>) -> Result<(), IngestError>;

    /// Submit a batch of events.
    async fn batch_events(&self, request: &EventsBatchRequest<'_>) -> Result<(), IngestError>;
}
