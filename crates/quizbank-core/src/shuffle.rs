//! Uniform random permutation (Fisher–Yates) over an injected random source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform random indices.
///
/// Implemented for any [`rand::Rng`] through [`RngSource`]; tests can supply
/// a scripted source to assert exact permutations.
pub trait RandomSource {
    /// Draw an index uniformly from `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

/// Adapter from a `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.0.random_range(0..=upper)
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    /// The thread-local, entropy-seeded generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

/// Return a uniformly random permutation of `items`, leaving `items` untouched.
///
/// Walks `i` from the last index down to 1, swapping position `i` with a
/// uniform draw from `0..=i`.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl RandomSource) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index_up_to(i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed list of draws, clamped to the requested bound.
    pub struct Scripted {
        draws: Vec<usize>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(draws: Vec<usize>) -> Self {
            Self { draws, pos: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn index_up_to(&mut self, upper: usize) -> usize {
            let draw = self.draws.get(self.pos).copied().unwrap_or(0);
            self.pos += 1;
            draw.min(upper)
        }
    }
}
