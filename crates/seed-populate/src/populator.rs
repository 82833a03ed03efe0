//! Seeding orchestrator.
//!
//! [`SeedPopulator`] walks the [`SeedStage`] state machine, building each
//! collection in memory and uploading it through an [`IngestSink`]. Uploads
//! are strictly sequential: at most one request is in flight per run.

use crate::error::{SeedError, StageError};
use crate::progress::{SeedObserver, SeedProgress, SeedStage};
use ingest_client::{
    EventTypesUpsertRequest, EventsBatchRequest, IngestSink, ItemsUpsertRequest,
    UsersUpsertRequest,
};
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::{Item, SeedConfig, User};
use seed_generator::DataGenerator;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Maximum number of items per upsert call.
pub const ITEM_CHUNK_SIZE: usize = 200;

/// Maximum number of events per batch call.
pub const EVENT_CHUNK_SIZE: usize = 1000;

/// How a seeding run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    Completed,
    /// An upload was rejected; earlier stages and chunks stay committed.
    Failed { stage: SeedStage, message: String },
}

/// Summary of a seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub namespace: String,
    pub event_types_registered: usize,
    pub users_generated: usize,
    pub users_uploaded: usize,
    pub items_generated: usize,
    pub items_uploaded: usize,
    pub events_generated: usize,
    pub events_uploaded: usize,
    /// Number of successful upload calls across all stages
    pub upload_calls: usize,
    pub item_chunks: usize,
    pub event_chunks: usize,
    pub completed_stages: Vec<SeedStage>,
    pub duration_ms: u64,
    #[serde(skip)]
    pub total_duration: Duration,
    pub outcome: SeedOutcome,
}

impl SeedReport {
    fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            event_types_registered: 0,
            users_generated: 0,
            users_uploaded: 0,
            items_generated: 0,
            items_uploaded: 0,
            events_generated: 0,
            events_uploaded: 0,
            upload_calls: 0,
            item_chunks: 0,
            event_chunks: 0,
            completed_stages: Vec::new(),
            duration_ms: 0,
            total_duration: Duration::ZERO,
            outcome: SeedOutcome::Completed,
        }
    }

    fn finish(&mut self, started: Instant) {
        self.total_duration = started.elapsed();
        self.duration_ms = self.total_duration.as_millis() as u64;
    }

    pub fn is_success(&self) -> bool {
        self.outcome == SeedOutcome::Completed
    }

    /// Total entities accepted by the backend, event types included.
    pub fn entities_uploaded(&self) -> usize {
        self.event_types_registered + self.users_uploaded + self.items_uploaded + self.events_uploaded
    }

    /// Calculate uploaded entities per second.
    pub fn entities_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.entities_uploaded() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Seeding orchestrator over an upload sink.
///
/// # Example
///
/// ```ignore
/// let sink = HttpIngestClient::new("http://localhost:8000")?;
/// let generator = DataGenerator::from_seed_option(config.seed);
/// let mut populator = SeedPopulator::new(sink, config, generator);
/// let report = populator.run(&mut TracingObserver).await?;
/// ```
pub struct SeedPopulator<S, R = StdRng> {
    sink: S,
    generator: DataGenerator<R>,
    config: SeedConfig,
    item_chunk_size: usize,
    event_chunk_size: usize,
}

impl<S: IngestSink, R: Rng> SeedPopulator<S, R> {
    pub fn new(sink: S, config: SeedConfig, generator: DataGenerator<R>) -> Self {
        Self {
            sink,
            generator,
            config,
            item_chunk_size: ITEM_CHUNK_SIZE,
            event_chunk_size: EVENT_CHUNK_SIZE,
        }
    }

    /// Lower the item chunk size. Values are clamped to `1..=ITEM_CHUNK_SIZE`.
    pub fn with_item_chunk_size(mut self, size: usize) -> Self {
        self.item_chunk_size = size.clamp(1, ITEM_CHUNK_SIZE);
        self
    }

    /// Lower the event chunk size. Values are clamped to `1..=EVENT_CHUNK_SIZE`.
    pub fn with_event_chunk_size(mut self, size: usize) -> Self {
        self.event_chunk_size = size.clamp(1, EVENT_CHUNK_SIZE);
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the populator and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run every stage in order.
    ///
    /// A rejected upload stops the run and is reported through
    /// [`SeedOutcome::Failed`]; nothing already uploaded is rolled back.
    /// Generator errors are programmer errors and return `Err`.
    pub async fn run<O: SeedObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<SeedReport, SeedError> {
        let started = Instant::now();
        let mut report = SeedReport::new(&self.config.namespace);

        info!(
            "Seeding namespace '{}': {} users, {} items, {}-{} events per user",
            self.config.namespace,
            self.config.user_count,
            self.config.item_count,
            self.config.min_events_per_user,
            self.config.max_events_per_user
        );

        // Collections built by earlier stages; events reference them directly.
        let mut users: Vec<User> = Vec::new();
        let mut items: Vec<Item> = Vec::new();

        let mut next_stage = Some(SeedStage::first());
        while let Some(stage) = next_stage {
            observer.on_progress(&SeedProgress::StageStarted { stage });

            let result = match stage {
                SeedStage::RegisterEventTypes => self.register_event_types(&mut report).await,
                SeedStage::Users => self.seed_users(observer, &mut report).await.map(|built| {
                    users = built;
                    users.len()
                }),
                SeedStage::Items => self.seed_items(observer, &mut report).await.map(|built| {
                    items = built;
                    items.len()
                }),
                SeedStage::Events => {
                    self.seed_events(observer, &mut report, &users, &items)
                        .await
                }
            };

            match result {
                Ok(entities) => {
                    report.completed_stages.push(stage);
                    observer.on_progress(&SeedProgress::StageCompleted { stage, entities });
                    next_stage = stage.next();
                }
                Err(StageError::Generator(source)) => {
                    observer.on_progress(&SeedProgress::Failed {
                        stage,
                        message: source.to_string(),
                    });
                    return Err(SeedError::InvalidArgument { stage, source });
                }
                Err(StageError::Upload(e)) => {
                    let message = e.to_string();
                    warn!("Upload failed in {} stage: {}", stage, message);
                    observer.on_progress(&SeedProgress::Failed {
                        stage,
                        message: message.clone(),
                    });
                    report.outcome = SeedOutcome::Failed { stage, message };
                    report.finish(started);
                    return Ok(report);
                }
            }
        }

        report.finish(started);
        info!(
            "Seeded namespace '{}' in {:?}: {} users, {} items, {} events ({:.1} entities/sec)",
            report.namespace,
            report.total_duration,
            report.users_uploaded,
            report.items_uploaded,
            report.events_uploaded,
            report.entities_per_second()
        );
        observer.on_progress(&SeedProgress::Completed {
            duration: report.total_duration,
        });

        Ok(report)
    }

    async fn register_event_types(&self, report: &mut SeedReport) -> Result<usize, StageError> {
        let request =
            EventTypesUpsertRequest::from_configs(&self.config.namespace, &self.config.event_types);
        self.sink.upsert_event_types(&request).await?;

        report.upload_calls += 1;
        report.event_types_registered = request.types.len();
        debug!("Registered {} event types", request.types.len());

        Ok(request.types.len())
    }

    async fn seed_users<O: SeedObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        report: &mut SeedReport,
    ) -> Result<Vec<User>, StageError> {
        let users = self.generator.users(&self.config)?;
        report.users_generated = users.len();
        observer.on_progress(&SeedProgress::Generated {
            stage: SeedStage::Users,
            count: users.len(),
        });
        let ids: Vec<String> = users.iter().map(|u| u.user_id.clone()).collect();
        observer.on_users_generated(&ids);

        // Users go up in one call.
        self.sink
            .upsert_users(&UsersUpsertRequest {
                namespace: &self.config.namespace,
                users: &users,
            })
            .await?;

        report.upload_calls += 1;
        report.users_uploaded = users.len();
        observer.on_progress(&SeedProgress::ChunkUploaded {
            stage: SeedStage::Users,
            chunk: 1,
            chunks: 1,
            entities: users.len(),
        });

        Ok(users)
    }

    async fn seed_items<O: SeedObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        report: &mut SeedReport,
    ) -> Result<Vec<Item>, StageError> {
        let items = self.generator.items(&self.config)?;
        report.items_generated = items.len();
        observer.on_progress(&SeedProgress::Generated {
            stage: SeedStage::Items,
            count: items.len(),
        });
        let ids: Vec<String> = items.iter().map(|i| i.item_id.clone()).collect();
        observer.on_items_generated(&ids);

        let chunks = items.len().div_ceil(self.item_chunk_size);
        for (idx, chunk) in items.chunks(self.item_chunk_size).enumerate() {
            self.sink
                .upsert_items(&ItemsUpsertRequest {
                    namespace: &self.config.namespace,
                    items: chunk,
                })
                .await?;

            report.upload_calls += 1;
            report.item_chunks += 1;
            report.items_uploaded += chunk.len();
            debug!(
                "Item chunk {}/{} uploaded ({} items)",
                idx + 1,
                chunks,
                chunk.len()
            );
            observer.on_progress(&SeedProgress::ChunkUploaded {
                stage: SeedStage::Items,
                chunk: idx + 1,
                chunks,
                entities: chunk.len(),
            });
        }

        Ok(items)
    }

    async fn seed_events<O: SeedObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        report: &mut SeedReport,
        users: &[User],
        items: &[Item],
    ) -> Result<usize, StageError> {
        let events = self.generator.events(&self.config, users, items)?;
        report.events_generated = events.len();
        observer.on_progress(&SeedProgress::Generated {
            stage: SeedStage::Events,
            count: events.len(),
        });

        let chunks = events.len().div_ceil(self.event_chunk_size);
        for (idx, chunk) in events.chunks(self.event_chunk_size).enumerate() {
            self.sink
                .batch_events(&EventsBatchRequest {
                    namespace: &self.config.namespace,
                    events: chunk,
                })
                .await?;

            report.upload_calls += 1;
            report.event_chunks += 1;
            report.events_uploaded += chunk.len();
            debug!(
                "Event chunk {}/{} submitted ({} events)",
                idx + 1,
                chunks,
                chunk.len()
            );
            observer.on_progress(&SeedProgress::ChunkUploaded {
                stage: SeedStage::Events,
                chunk: idx + 1,
                chunks,
                entities: chunk.len(),
            });
        }

        Ok(events.len())
    }
}
