//! Sink that accepts every upload without sending it anywhere.

use crate::envelope::{
    EventTypesUpsertRequest, EventsBatchRequest, ItemsUpsertRequest, UsersUpsertRequest,
};
use crate::error::IngestError;
use crate::sink::IngestSink;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Totals accepted by a [`DryRunSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DryRunTotals {
    pub event_types: u64,
    pub users: u64,
    pub items: u64,
    pub events: u64,
    pub calls: u64,
}

/// Ingest sink for `--dry-run`: logs payload sizes and counts them.
#[derive(Debug, Default)]
pub struct DryRunSink {
    event_types: AtomicU64,
    users: AtomicU64,
    items: AtomicU64,
    events: AtomicU64,
    calls: AtomicU64,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn totals(&self) -> DryRunTotals {
        DryRunTotals {
            event_types: self.event_types.load(Ordering::Relaxed),
            users: self.users.load(Ordering::Relaxed),
            items: self.items.load(Ordering::Relaxed),
            events: self.events.load(Ordering::Relaxed),
            calls: self.calls.load(Ordering::Relaxed),
        }
    }

    fn record(&self, counter: &AtomicU64, count: usize) {
        counter.fetch_add(count as u64, Ordering::Relaxed);
        self.calls.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl IngestSink for DryRunSink {
    async fn upsert_event_types(
        &self,
        request: &EventTypesUpsertRequest<'_>,
    ) -> Result<(), IngestError> {
        info!(
            "[DRY-RUN] Would upsert {} event types into '{}'",
            request.types.len(),
            request.namespace
        );
        self.record(&self.event_types, request.types.len());
        Ok(())
    }

    async fn upsert_users(&self, request: &UsersUpsertRequest<'_>) -> Result<(), IngestError> {
        info!(
            "[DRY-RUN] Would upsert {} users into '{}'",
            request.users.len(),
            request.namespace
        );
        self.record(&self.users, request.users.len());
        Ok(())
    }

    async fn upsert_items(&self, request: &ItemsUpsertRequest<'_>) -> Result<(), IngestError> {
        info!(
            "[DRY-RUN] Would upsert {} items into '{}'",
            request.items.len(),
            request.namespace
        );
        self.record(&self.items, request.items.len());
        Ok(())
    }

    async fn batch_events(&self, request: &EventsBatchRequest<'_>) -> Result<(), IngestError> {
        info!(
            "[DRY-RUN] Would submit {} events into '{}'",
            request.events.len(),
            request.namespace
        );
        self.record(&self.events, request.events.len());
        Ok(())
    }
}
