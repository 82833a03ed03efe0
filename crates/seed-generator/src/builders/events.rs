//! Event builder.

use super::PREALLOCATION_LIMIT;
use crate::error::GeneratorError;
use crate::sampler::{uniform_choice, uniform_int, weighted_choice};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use seed_core::{Event, EventTypeConfig, Item, User, PURCHASE_EVENT_TYPE};

/// Upper bound of the recency bias term added to every event age.
pub const RECENCY_BIAS_DAYS: i64 = 21;

/// Draw a synthetic event age in days.
///
/// The wide base range folds negative draws back onto small positive ages
/// through the absolute value, which skews ages toward recent activity while
/// keeping a long tail out to about two months.
pub fn recency_age_days<R: Rng + ?Sized>(rng: &mut R) -> Result<i64, GeneratorError> {
    let base = uniform_int(rng, -5i64, 60)?;
    let bias = uniform_int(rng, 0i64, RECENCY_BIAS_DAYS)?;
    let age = (base as f64 + bias as f64 / 3.0).abs().round() as i64;
    Ok(age.max(0))
}

/// Build events for every user against the given items.
///
/// Each user gets between `min_events_per_user` and `max_events_per_user`
/// events (inclusive). Event types are picked by their configured weight;
/// purchases carry a quantity of 1-3, everything else a value of 1.
/// Timestamps are `now` minus a recency-biased number of days.
pub fn build_events<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    users: &[User],
    items: &[Item],
    min_events_per_user: u64,
    max_events_per_user: u64,
    event_types: &[EventTypeConfig],
) -> Result<Vec<Event>, GeneratorError> {
    let type_indexes: Vec<i16> = event_types.iter().map(|t| t.index).collect();
    let type_weights: Vec<f64> = event_types.iter().map(|t| t.weight).collect();

    let expected = users
        .len()
        .saturating_mul(usize::try_from(min_events_per_user).unwrap_or(usize::MAX));
    let mut events = Vec::with_capacity(expected.min(PREALLOCATION_LIMIT));

    for user in users {
        let event_count = uniform_int(rng, min_events_per_user, max_events_per_user)?;

        for _ in 0..event_count {
            let item = uniform_choice(rng, items)?;
            let event_type = *weighted_choice(rng, &type_indexes, &type_weights)?;
            let age_days = recency_age_days(rng)?;
            let ts = (now - Duration::days(age_days)).to_rfc3339_opts(SecondsFormat::Millis, true);
            let value = if event_type == PURCHASE_EVENT_TYPE {
                uniform_int(rng, 1u32, 3)?
            } else {
                1
            };

            events.push(Event {
                user_id: user.user_id.clone(),
                item_id: item.item_id.clone(),
                event_type,
                ts,
                value,
            });
        }
    }

    Ok(events)
}
