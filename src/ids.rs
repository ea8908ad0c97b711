//! Id generation for newly created items and friends.
//!
//! Ids only need to be unique in practice. [`allocate_id`] re-draws when a
//! source hands out an id that is already in use.

use rand::RngExt;
use std::collections::HashSet;

/// Number of draws before [`allocate_id`] gives up on the source and picks
/// one past the largest id in use.
const MAX_DRAWS: usize = 16;

/// Something that hands out candidate ids.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

/// Time-derived ids salted with a random component, like `Date.now()` ids in
/// a browser but without the collisions of two clicks in the same millisecond.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> u64 {
        let mut rng = rand::rng();
        let millis = chrono::Utc::now().timestamp_millis().unsigned_abs();
        let salt: u64 = rng.random_range(0..1_000_000);
        millis.wrapping_mul(1_000_000).wrapping_add(salt)
    }
}

/// Deterministic ids counting up from a starting value.
#[cfg(test)]
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

#[cfg(test)]
impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

#[cfg(test)]
impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Draw an id from `source` that does not appear in `in_use`.
pub fn allocate_id<S>(source: &mut S, in_use: impl IntoIterator<Item = u64>) -> u64
where
    S: IdSource + ?Sized,
{
    let taken: HashSet<u64> = in_use.into_iter().collect();
    for _ in 0..MAX_DRAWS {
        let candidate = source.next_id();
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
    taken.iter().max().map_or(1, |max| max.wrapping_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stuck(u64);

    impl IdSource for Stuck {
        fn next_id(&mut self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let mut ids = SequentialIds::starting_at(5);
        assert_eq!(ids.next_id(), 5);
        assert_eq!(ids.next_id(), 6);
    }

    #[test]
    fn test_allocate_skips_ids_in_use() {
        let mut ids = SequentialIds::default();
        assert_eq!(allocate_id(&mut ids, [1, 2, 4]), 3);
    }

    #[test]
    fn test_allocate_falls_back_past_largest() {
        let mut stuck = Stuck(7);
        assert_eq!(allocate_id(&mut stuck, [7, 3]), 8);
    }

    #[test]
    fn test_random_ids_are_distinct_in_practice() {
        let mut ids = RandomIds;
        let drawn: HashSet<u64> = (0..50).map(|_| allocate_id(&mut ids, [])).collect();
        assert!(drawn.len() > 45);
    }
}
