use rand::{seq::SliceRandom, Rng};

use crate::step::Value;

/// Samples `len` values uniformly from `1..=max`. A `max` below one is treated
/// as one.
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, len: usize, max: Value) -> Vec<Value> {
    let max = max.max(1);
    (0..len).map(|_| rng.gen_range(1..=max)).collect()
}

/// Picks one of the array's values, so the search is guaranteed to succeed.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R, array: &[Value]) -> Option<Value> {
    array.choose(rng).copied()
}
