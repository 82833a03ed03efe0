//! Random sampling primitives.
//!
//! Every function takes the RNG explicitly so callers control seeding.
//! Weights are relative: they are normalized internally and never need to
//! sum to one.

use crate::error::GeneratorError;
use rand::distributions::uniform::SampleUniform;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Display;

/// Pick one element uniformly.
pub fn uniform_choice<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, GeneratorError> {
    items
        .choose(rng)
        .ok_or_else(|| GeneratorError::InvalidArgument("cannot choose from an empty list".into()))
}

/// Draw an integer uniformly from `min..=max`.
pub fn uniform_int<T, R>(rng: &mut R, min: T, max: T) -> Result<T, GeneratorError>
where
    T: SampleUniform + PartialOrd + Copy + Display,
    R: Rng + ?Sized,
{
    if min > max {
        return Err(GeneratorError::InvalidArgument(format!(
            "empty integer range {min}..={max}"
        )));
    }
    Ok(rng.gen_range(min..=max))
}

/// Bernoulli trial: `true` with probability `p`.
///
/// `p <= 0` never succeeds and `p >= 1` always does.
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Pick an index by relative weight.
///
/// Draws `r` in `[0, total)` and returns the first index whose cumulative
/// weight exceeds `r`. When the total weight is not positive the last index
/// is returned.
///
/// The comparison is strict: a draw landing exactly on a cumulative boundary
/// belongs to the next index, so a zero-weight entry is never returned.
pub fn weighted_index<R: Rng + ?Sized>(
    rng: &mut R,
    weights: &[f64],
) -> Result<usize, GeneratorError> {
    if weights.is_empty() {
        return Err(GeneratorError::InvalidArgument(
            "cannot choose from an empty weight list".into(),
        ));
    }

    let last = weights.len() - 1;
    let total: f64 = weights.iter().sum();
    if !(total > 0.0) {
        return Ok(last);
    }

    let mut remaining = rng.gen::<f64>() * total;
    for (idx, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining < 0.0 {
            return Ok(idx);
        }
    }

    // Rounding can leave a tiny positive remainder after the last weight.
    Ok(last)
}

/// Pick one element by relative weight.
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    weights: &[f64],
) -> Result<&'a T, GeneratorError> {
    check_weighted_input(items, weights)?;
    let idx = weighted_index(rng, weights)?;
    Ok(&items[idx])
}

/// Draw up to `count` elements by weight without replacement.
///
/// Each draw removes exactly one element from the remaining pool. Fewer than
/// `count` elements are returned when the pool runs out.
pub fn weighted_choices<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    weights: &[f64],
    count: usize,
) -> Result<Vec<&'a T>, GeneratorError> {
    check_weighted_input(items, weights)?;

    // The pool holds indices into `items`; the inputs are never touched.
    let mut pool: Vec<usize> = (0..items.len()).collect();
    let mut pool_weights = weights.to_vec();
    let mut picked = Vec::with_capacity(count.min(items.len()));

    while picked.len() < count && !pool.is_empty() {
        let pos = weighted_index(rng, &pool_weights)?;
        picked.push(&items[pool.remove(pos)]);
        pool_weights.remove(pos);
    }

    Ok(picked)
}

fn check_weighted_input<T>(items: &[T], weights: &[f64]) -> Result<(), GeneratorError> {
    if items.is_empty() {
        return Err(GeneratorError::InvalidArgument(
            "cannot choose from an empty list".into(),
        ));
    }
    if items.len() != weights.len() {
        return Err(GeneratorError::InvalidArgument(format!(
            "{} items but {} weights",
            items.len(),
            weights.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_weighted_index_boundary_goes_to_next_index() {
        // An all-zero source always draws r = 0.0.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(weighted_index(&mut rng, &[0.0, 1.0]).unwrap(), 1);
        assert_eq!(weighted_index(&mut rng, &[0.0, 0.0, 2.0]).unwrap(), 2);
        assert_eq!(weighted_index(&mut rng, &[1.0, 0.0]).unwrap(), 0);
    }

    #[test]
    fn test_uniform_choice_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: [u8; 0] = [];
        assert!(matches!(
            uniform_choice(&mut rng, &empty),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_uniform_choice_covers_all_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(*uniform_choice(&mut rng, &items).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_uniform_int_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..500 {
            let v = uniform_int(&mut rng, 1, 3).unwrap();
            assert!((1..=3).contains(&v));
            saw_min |= v == 1;
            saw_max |= v == 3;
        }
        assert!(saw_min && saw_max);

        assert_eq!(uniform_int(&mut rng, 7, 7).unwrap(), 7);
    }

    #[test]
    fn test_uniform_int_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(uniform_int(&mut rng, 5, 4).is_err());
    }

    #[test]
    fn test_bernoulli_edges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(!bernoulli(&mut rng, 0.0));
            assert!(!bernoulli(&mut rng, -1.0));
            assert!(bernoulli(&mut rng, 1.0));
            assert!(bernoulli(&mut rng, 2.5));
        }
    }

    #[test]
    fn test_weighted_choice_frequencies() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        let weights = [1.0, 1.0, 2.0];
        let draws = 20_000;
        let mut counts = [0usize; 3];

        for _ in 0..draws {
            let picked = weighted_choice(&mut rng, &items, &weights).unwrap();
            let idx = items.iter().position(|i| i == picked).unwrap();
            counts[idx] += 1;
        }

        let freq: Vec<f64> = counts.iter().map(|c| *c as f64 / draws as f64).collect();
        assert!((freq[0] - 0.25).abs() < 0.02, "freq[0] = {}", freq[0]);
        assert!((freq[1] - 0.25).abs() < 0.02, "freq[1] = {}", freq[1]);
        assert!((freq[2] - 0.50).abs() < 0.02, "freq[2] = {}", freq[2]);
    }

    #[test]
    fn test_weighted_choice_all_zero_returns_last() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            assert_eq!(
                *weighted_choice(&mut rng, &items, &[0.0, 0.0, 0.0]).unwrap(),
                "c"
            );
            assert_eq!(
                *weighted_choice(&mut rng, &items, &[-1.0, 0.0, -2.0]).unwrap(),
                "c"
            );
        }
    }

    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["never", "always", "never-either"];
        for _ in 0..500 {
            assert_eq!(
                *weighted_choice(&mut rng, &items, &[0.0, 5.0, 0.0]).unwrap(),
                "always"
            );
        }
    }

    #[test]
    fn test_weighted_choice_invalid_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: [&str; 0] = [];
        assert!(weighted_choice(&mut rng, &empty, &[]).is_err());
        assert!(weighted_choice(&mut rng, &["a", "b"], &[1.0]).is_err());
    }

    #[test]
    fn test_weighted_choices_without_replacement() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c", "d"];
        let weights = [1.0, 2.0, 3.0, 4.0];

        for _ in 0..100 {
            let picked = weighted_choices(&mut rng, &items, &weights, 3).unwrap();
            assert_eq!(picked.len(), 3);
            let unique: std::collections::HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_weighted_choices_stops_when_pool_empties() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b"];
        let picked = weighted_choices(&mut rng, &items, &[1.0, 1.0], 5).unwrap();
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn test_weighted_choices_leaves_inputs_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec!["a", "b", "c"];
        let weights = vec![0.0, 0.0, 0.0];
        let picked = weighted_choices(&mut rng, &items, &weights, 3).unwrap();
        // All-zero pools always yield the current last element.
        assert_eq!(picked, vec![&"c", &"b", &"a"]);
        assert_eq!(items, vec!["a", "b", "c"]);
        assert_eq!(weights, vec![0.0, 0.0, 0.0]);
    }
}
