use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform picks for recipe selection.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping around when exhausted.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    picks: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }

        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}
