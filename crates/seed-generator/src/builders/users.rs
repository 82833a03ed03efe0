//! User builder.

use super::PREALLOCATION_LIMIT;
use crate::error::GeneratorError;
use crate::resolver::resolve_attributes;
use crate::sampler::uniform_choice;
use rand::Rng;
use seed_core::{entity_id, AttributeConfig, User};

/// Plans assigned when no configured trait was included.
pub const FALLBACK_PLANS: [&str; 3] = ["free", "plus", "pro"];

/// Build `count` users with IDs `user-{start_index}` onwards.
///
/// A user whose configured traits all missed gets a single `plan` trait, so
/// no user is ever featureless.
pub fn build_users<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    start_index: u64,
    trait_configs: &[AttributeConfig],
) -> Result<Vec<User>, GeneratorError> {
    if count > 0 && start_index.checked_add(count - 1).is_none() {
        return Err(GeneratorError::InvalidArgument(format!(
            "{count} users starting at index {start_index} overflow the user index range"
        )));
    }

    let mut users = Vec::with_capacity(count.min(PREALLOCATION_LIMIT as u64) as usize);

    for offset in 0..count {
        let mut traits = resolve_attributes(rng, trait_configs)?;
        if traits.is_empty() {
            let plan = uniform_choice(rng, &FALLBACK_PLANS)?;
            traits.insert("plan".to_string(), plan.to_string());
        }

        users.push(User {
            user_id: entity_id("user", start_index + offset),
            traits,
        });
    }

    Ok(users)
}
