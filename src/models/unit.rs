//! Processing-unit tracker.
//!
//! Tracks the next-free time of each identical parallel unit during one
//! scheduling run. A pool is owned by exactly one run: schedulers build a
//! fresh pool per call, so repeated or interleaved simulations cannot
//! interfere with each other.

use super::TimeStep;

/// Next-free times for a fixed set of identical processing units.
///
/// Units are anonymous and interchangeable, so they are addressed by
/// index. All units start free at t=0, and each unit's free time only
/// ever moves forward.
#[derive(Debug, Clone)]
pub struct UnitPool {
    next_free: Vec<TimeStep>,
}

impl UnitPool {
    /// Creates a pool of `num_units` units, all free at t=0.
    pub fn new(num_units: usize) -> Self {
        Self {
            next_free: vec![0; num_units],
        }
    }

    /// Number of units in the pool.
    pub fn len(&self) -> usize {
        self.next_free.len()
    }

    /// Whether the pool has no units.
    pub fn is_empty(&self) -> bool {
        self.next_free.is_empty()
    }

    /// Returns the unit that becomes free earliest, as `(index, free_at)`.
    ///
    /// Ties resolve to the lowest index, which keeps unit selection
    /// deterministic across runs.
    ///
    /// # Panics
    /// Panics if the pool is empty; schedulers validate `num_units >= 1`
    /// before constructing a pool.
    pub fn idlest(&self) -> (usize, TimeStep) {
        let (index, &free_at) = self
            .next_free
            .iter()
            .enumerate()
            .min_by_key(|&(index, &free_at)| (free_at, index))
            .expect("UnitPool::idlest on empty pool");
        (index, free_at)
    }

    /// Next-free time of one unit.
    pub fn free_at(&self, index: usize) -> TimeStep {
        self.next_free[index]
    }

    /// Marks `unit` busy until `end` after dispatching a job to it.
    ///
    /// `end` must not precede the unit's current free time (intervals on
    /// one unit never overlap).
    pub fn commit(&mut self, index: usize, end: TimeStep) {
        debug_assert!(end >= self.next_free[index]);
        self.next_free[index] = end;
    }

    /// Advances `unit` to time `t` without dispatching anything.
    ///
    /// Used when no job has arrived yet: the unit idles forward to the
    /// next arrival. Never moves a unit backwards.
    pub fn advance(&mut self, index: usize, t: TimeStep) {
        if t > self.next_free[index] {
            self.next_free[index] = t;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_starts_idle() {
        let pool = UnitPool::new(3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.idlest(), (0, 0));
    }

    #[test]
    fn test_idlest_picks_minimum_free_time() {
        let mut pool = UnitPool::new(3);
        pool.commit(0, 10);
        pool.commit(1, 4);
        pool.commit(2, 7);
        assert_eq!(pool.idlest(), (1, 4));
    }

    #[test]
    fn test_idlest_tie_breaks_on_lowest_index() {
        let mut pool = UnitPool::new(3);
        pool.commit(0, 5);
        pool.commit(1, 3);
        pool.commit(2, 3);
        assert_eq!(pool.idlest(), (1, 3));
    }

    #[test]
    fn test_commit_is_monotonic() {
        let mut pool = UnitPool::new(1);
        pool.commit(0, 5);
        pool.commit(0, 9);
        assert_eq!(pool.free_at(0), 9);
    }

    #[test]
    fn test_advance_never_moves_backwards() {
        let mut pool = UnitPool::new(1);
        pool.commit(0, 8);
        pool.advance(0, 3);
        assert_eq!(pool.free_at(0), 8);
        pool.advance(0, 12);
        assert_eq!(pool.free_at(0), 12);
    }
}
