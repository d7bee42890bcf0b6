//! Drawing a quiz attempt from the bank.

use crate::shuffle::{shuffle, RandomSource};

/// Select `min(count, items.len())` distinct items in random order.
///
/// Shuffles the whole bank and truncates, so every `count`-subset and every
/// ordering of it is equally likely.
pub fn select<T: Clone>(items: &[T], count: usize, rng: &mut impl RandomSource) -> Vec<T> {
    let mut shuffled = shuffle(items, rng);
    shuffled.truncate(count.min(items.len()));
    shuffled
}
