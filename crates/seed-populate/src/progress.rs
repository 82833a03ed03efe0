//! Seeding stages and structured progress reporting.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info};

/// A stage of the seeding pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStage {
    RegisterEventTypes,
    Users,
    Items,
    Events,
}

impl SeedStage {
    /// All stages in execution order.
    pub const ALL: [SeedStage; 4] = [
        SeedStage::RegisterEventTypes,
        SeedStage::Users,
        SeedStage::Items,
        SeedStage::Events,
    ];

    pub fn first() -> Self {
        SeedStage::RegisterEventTypes
    }

    /// The stage that runs after this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            SeedStage::RegisterEventTypes => Some(SeedStage::Users),
            SeedStage::Users => Some(SeedStage::Items),
            SeedStage::Items => Some(SeedStage::Events),
            SeedStage::Events => None,
        }
    }

    /// Plural noun for the entities this stage uploads.
    pub fn entity_name(self) -> &'static str {
        match self {
            SeedStage::RegisterEventTypes => "event types",
            SeedStage::Users => "users",
            SeedStage::Items => "items",
            SeedStage::Events => "events",
        }
    }
}

impl std::fmt::Display for SeedStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedStage::RegisterEventTypes => write!(f, "register-event-types"),
            SeedStage::Users => write!(f, "users"),
            SeedStage::Items => write!(f, "items"),
            SeedStage::Events => write!(f, "events"),
        }
    }
}

/// A progress event emitted while seeding.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedProgress {
    StageStarted {
        stage: SeedStage,
    },
    /// A collection was built in memory.
    Generated {
        stage: SeedStage,
        count: usize,
    },
    /// One upload call succeeded. `chunk` is 1-based.
    ChunkUploaded {
        stage: SeedStage,
        chunk: usize,
        chunks: usize,
        entities: usize,
    },
    StageCompleted {
        stage: SeedStage,
        entities: usize,
    },
    Completed {
        duration: Duration,
    },
    Failed {
        stage: SeedStage,
        message: String,
    },
}

impl SeedProgress {
    pub fn is_failure(&self) -> bool {
        matches!(self, SeedProgress::Failed { .. })
    }
}

impl std::fmt::Display for SeedProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedProgress::StageStarted { stage } => write!(f, "Starting {stage} stage"),
            SeedProgress::Generated { stage, count } => {
                write!(f, "Generated {count} {}", stage.entity_name())
            }
            SeedProgress::ChunkUploaded {
                stage,
                chunk,
                chunks,
                entities,
            } => {
                let verb = if *stage == SeedStage::Events {
                    "Batched"
                } else {
                    "Upserted"
                };
                if *chunks > 1 {
                    write!(
                        f,
                        "{verb} {entities} {} (chunk {chunk}/{chunks})",
                        stage.entity_name()
                    )
                } else {
                    write!(f, "{verb} {entities} {}", stage.entity_name())
                }
            }
            SeedProgress::StageCompleted { stage, entities } => {
                write!(f, "Finished {stage} stage ({entities} {})", stage.entity_name())
            }
            SeedProgress::Completed { duration } => write!(f, "Seed complete in {duration:?}"),
            SeedProgress::Failed { stage, message } => {
                write!(f, "Seed error in {stage} stage: {message}")
            }
        }
    }
}

/// Receiver of seeding progress.
///
/// The ID callbacks fire right after each collection is built, before its
/// upload finishes, so callers can reference the IDs immediately.
pub trait SeedObserver {
    fn on_progress(&mut self, event: &SeedProgress);

    fn on_users_generated(&mut self, _user_ids: &[String]) {}

    fn on_items_generated(&mut self, _item_ids: &[String]) {}
}

/// Observer that writes progress to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SeedObserver for TracingObserver {
    fn on_progress(&mut self, event: &SeedProgress) {
        match event {
            SeedProgress::Failed { .. } => error!("{}", event),
            SeedProgress::ChunkUploaded { .. } => debug!("{}", event),
            _ => info!("{}", event),
        }
    }

    fn on_users_generated(&mut self, user_ids: &[String]) {
        if let (Some(first), Some(last)) = (user_ids.first(), user_ids.last()) {
            info!("Generated user IDs {}..{}", first, last);
        }
    }

    fn on_items_generated(&mut self, item_ids: &[String]) {
        if let (Some(first), Some(last)) = (item_ids.first(), item_ids.last()) {
            info!("Generated item IDs {}..{}", first, last);
        }
    }
}

/// Channel form: progress events are forwarded to the receiver.
///
/// A dropped receiver is ignored; seeding does not depend on anyone
/// listening.
impl SeedObserver for UnboundedSender<SeedProgress> {
    fn on_progress(&mut self, event: &SeedProgress) {
        let _ = self.send(event.clone());
    }
}
