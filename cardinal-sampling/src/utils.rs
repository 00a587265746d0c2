//! Helpers shared by the samplers.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cardinal_core::errors::{CardinalResult, SamplingError};

/// Seeded RNG, or one seeded from entropy when `seed` is `None`.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fail when `batch_size` exceeds the `available` candidates.
pub(crate) fn ensure_candidates(batch_size: usize, available: usize) -> CardinalResult<()> {
    if batch_size > available {
        return Err(SamplingError::InsufficientCandidates {
            requested: batch_size,
            available,
        }
        .into());
    }
    Ok(())
}

/// Map indices into a subset back to indices of the full set.
pub(crate) fn map_back(subset: &[usize], inner: &[usize]) -> CardinalResult<Vec<usize>> {
    inner
        .iter()
        .map(|&i| {
            subset.get(i).copied().ok_or_else(|| {
                SamplingError::precondition(format!(
                    "index {i} outside a subset of {} rows",
                    subset.len()
                ))
                .into()
            })
        })
        .collect()
}

/// Extend a selection of unique indices with distinct random indices drawn
/// from `[low, high)` until it holds `batch_size` entries.
///
/// The existing entries keep their order and the new ones are appended. A
/// selection already at or above `batch_size` is returned unchanged.
pub fn pad_with_random<R: Rng + ?Sized>(
    mut selected: Vec<usize>,
    batch_size: usize,
    low: usize,
    high: usize,
    rng: &mut R,
) -> CardinalResult<Vec<usize>> {
    if selected.len() >= batch_size {
        return Ok(selected);
    }
    let taken: HashSet<usize> = selected.iter().copied().collect();
    let pool: Vec<usize> = (low..high).filter(|i| !taken.contains(i)).collect();
    let missing = batch_size - selected.len();
    if pool.len() < missing {
        return Err(SamplingError::InsufficientCandidates {
            requested: batch_size,
            available: selected.len() + pool.len(),
        }
        .into());
    }
    selected.extend(
        rand::seq::index::sample(rng, pool.len(), missing)
            .into_iter()
            .map(|i| pool[i]),
    );
    Ok(selected)
}
