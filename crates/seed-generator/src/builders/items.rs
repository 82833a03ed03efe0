//! Item builder.

use super::PREALLOCATION_LIMIT;
use crate::error::GeneratorError;
use crate::resolver::resolve_attributes;
use crate::sampler::{bernoulli, uniform_choice, uniform_int, weighted_choice};
use rand::Rng;
use seed_core::{entity_id, AttributeConfig, Item, PriceRange};

/// Chance that a generated item is marked available.
pub const AVAILABILITY_PROBABILITY: f64 = 0.95;

/// Price bounds used when no price ranges are configured.
pub const FALLBACK_PRICE_RANGE: (i64, i64) = (5, 200);

const MAX_TAGS_PER_ITEM: usize = 3;

/// Build `count` items with IDs `item-0001` onwards.
///
/// Tags are drawn one to three times from `tags`; repeated draws collapse,
/// so small vocabularies can yield fewer tags than drawn. `brand` is always
/// written into `props`, overriding any configured property of that name.
pub fn build_items<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    brands: &[String],
    tags: &[String],
    item_configs: &[AttributeConfig],
    price_ranges: &[PriceRange],
) -> Result<Vec<Item>, GeneratorError> {
    let range_weights: Vec<f64> = price_ranges.iter().map(|r| r.probability).collect();
    let mut items = Vec::with_capacity(count.min(PREALLOCATION_LIMIT as u64) as usize);

    for ordinal in 1..=count {
        let brand = uniform_choice(rng, brands)?.clone();

        let tag_draws = uniform_int(rng, 1, MAX_TAGS_PER_ITEM)?;
        let mut item_tags: Vec<String> = Vec::with_capacity(tag_draws);
        for _ in 0..tag_draws {
            let tag = uniform_choice(rng, tags)?;
            if !item_tags.contains(tag) {
                item_tags.push(tag.clone());
            }
        }

        let price = if price_ranges.is_empty() {
            uniform_int(rng, FALLBACK_PRICE_RANGE.0, FALLBACK_PRICE_RANGE.1)?
        } else {
            let range = weighted_choice(rng, price_ranges, &range_weights)?;
            uniform_int(rng, range.min, range.max)?
        };

        let mut props = resolve_attributes(rng, item_configs)?;
        props.insert("brand".to_string(), brand);

        let available = bernoulli(rng, AVAILABILITY_PROBABILITY);

        items.push(Item {
            item_id: entity_id("item", ordinal),
            price,
            available,
            tags: item_tags,
            props,
        });
    }

    Ok(items)
}
