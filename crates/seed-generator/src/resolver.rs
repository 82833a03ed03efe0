//! Attribute resolution for user traits and item properties.

use crate::error::GeneratorError;
use crate::sampler::{bernoulli, weighted_choice};
use rand::Rng;
use seed_core::AttributeConfig;
use std::collections::BTreeMap;

/// Resolve a set of independent attribute configs into a key/value map.
///
/// Each config is included with its own probability; included keys get a
/// value drawn by weight. The result may be empty.
pub fn resolve_attributes<R: Rng + ?Sized>(
    rng: &mut R,
    configs: &[AttributeConfig],
) -> Result<BTreeMap<String, String>, GeneratorError> {
    let mut resolved = BTreeMap::new();

    for config in configs {
        if !bernoulli(rng, config.probability) {
            continue;
        }

        let weights: Vec<f64> = config.values.iter().map(|v| v.probability).collect();
        let chosen = weighted_choice(rng, &config.values, &weights).map_err(|e| {
            GeneratorError::InvalidArgument(format!("attribute '{}': {e}", config.key))
        })?;
        resolved.insert(config.key.clone(), chosen.value.clone());
    }

    Ok(resolved)
}
