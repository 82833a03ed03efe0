//! Synthetic data generator for the recsys seeding pipeline.
//!
//! This crate provides the sampling primitives, the attribute resolver and
//! the user/item/event builders. [`DataGenerator`] bundles them around one
//! injected RNG so a run can be reproduced from its seed.
//!
//! # Architecture
//!
//! ```text
//!  sampler       uniform / integer / bernoulli / weighted choice
//!     │
//!     ▼
//!  resolver      AttributeConfig[] -> { key: value }
//!     │
//!     ▼
//!  builders      users, items, events (events reference users + items)
//!     │
//!     ▼
//!  DataGenerator (owns the RNG and the reference time)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::SeedConfig;
//! use seed_generator::DataGenerator;
//!
//! let config = SeedConfig {
//!     user_count: 3,
//!     item_count: 2,
//!     ..SeedConfig::default()
//! };
//!
//! let mut generator = DataGenerator::new(42);
//! let users = generator.users(&config).unwrap();
//! let items = generator.items(&config).unwrap();
//! let events = generator.events(&config, &users, &items).unwrap();
//!
//! assert_eq!(users[0].user_id, "user-0001");
//! assert!(events.iter().all(|e| e.item_id.starts_with("item-")));
//! ```

pub mod builders;
pub mod error;
pub mod generator;
pub mod resolver;
pub mod sampler;

// Re-exports for convenience
pub use builders::{build_events, build_items, build_users};
pub use error::GeneratorError;
pub use generator::DataGenerator;
pub use resolver::resolve_attributes;
