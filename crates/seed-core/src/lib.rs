//! Core types for the recsys seeding pipeline.
//!
//! This crate provides the foundational types shared by the generator,
//! the ingestion client and the populate orchestrator:
//!
//! - [`WeightedValue`], [`AttributeConfig`], [`PriceRange`], [`EventTypeConfig`] -
//!   the statistical shape of a seeding run
//! - [`User`], [`Item`], [`Event`] - generated entities, serialized in the
//!   backend's ingestion wire shape
//! - [`SeedConfig`] - the full seeding document loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator  (samples entities from the config types)
//!    │
//!    ├─── ingest-client   (wraps entities into upload envelopes)
//!    │
//!    └─── seed-populate   (sequences generation and upload)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::SeedConfig;
//!
//! let config = SeedConfig::from_yaml(r#"
//! namespace: demo
//! user_count: 10
//! item_count: 5
//! "#).unwrap();
//!
//! assert_eq!(config.namespace, "demo");
//! assert_eq!(config.brands.len(), 6);
//! ```

pub mod config;
pub mod model;

// Re-exports for convenience
pub use config::{ConfigError, SeedConfig};
pub use model::{
    entity_id, AttributeConfig, Event, EventTypeConfig, Item, PriceRange, User, WeightedValue,
    PURCHASE_EVENT_TYPE,
};
