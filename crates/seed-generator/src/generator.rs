//! Main data generator for producing seeding entities.

use crate::builders::{build_events, build_items, build_users};
use crate::error::GeneratorError;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{Event, Item, SeedConfig, User};

/// Data generator that owns the RNG for one seeding run.
///
/// The RNG is injected, so a seeded generator reproduces the same users,
/// items and events for the same config and reference time.
pub struct DataGenerator<R = StdRng> {
    /// Random source shared by all builders of this run
    rng: R,
    /// Instant event ages are measured back from
    reference_time: DateTime<Utc>,
}

impl DataGenerator<StdRng> {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a generator from an optional seed, falling back to entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> DataGenerator<R> {
    /// Create a generator around an existing RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            reference_time: Utc::now(),
        }
    }

    /// Pin the instant event timestamps are computed from.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    /// Generate the users described by `config`.
    pub fn users(&mut self, config: &SeedConfig) -> Result<Vec<User>, GeneratorError> {
        build_users(
            &mut self.rng,
            config.user_count,
            config.user_start_index,
            &config.user_traits,
        )
    }

    /// Generate the items described by `config`.
    pub fn items(&mut self, config: &SeedConfig) -> Result<Vec<Item>, GeneratorError> {
        build_items(
            &mut self.rng,
            config.item_count,
            &config.brands,
            &config.tags,
            &config.item_properties,
            &config.price_ranges,
        )
    }

    /// Generate events between the given users and items.
    pub fn events(
        &mut self,
        config: &SeedConfig,
        users: &[User],
        items: &[Item],
    ) -> Result<Vec<Event>, GeneratorError> {
        build_events(
            &mut self.rng,
            self.reference_time,
            users,
            items,
            config.min_events_per_user,
            config.max_events_per_user,
            &config.event_types,
        )
    }
}
