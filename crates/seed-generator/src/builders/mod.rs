//! Entity builders.
//!
//! Each builder produces a complete in-memory collection. Builders never share
//! state with each other; events take the user and item collections as input
//! so every event references an entity from the same run.

/// Cap on up-front capacity reservations; collections grow past it as needed.
pub(crate) const PREALLOCATION_LIMIT: usize = 1 << 16;

pub mod events;
pub mod items;
pub mod users;

pub use events::{build_events, recency_age_days, RECENCY_BIAS_DAYS};
pub use items::{build_items, AVAILABILITY_PROBABILITY, FALLBACK_PRICE_RANGE};
pub use users::{build_users, FALLBACK_PLANS};
