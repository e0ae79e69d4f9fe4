//! Random choice capability.
//!
//! The engine never touches an unseeded source. Everything that needs a
//! non-deterministic pick goes through `RandomChoice`, which is injected at
//! construction and can be replaced by `ScriptedChoice` in tests.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Independent branches for separate strategies
//!
//! ```
//! use stone_ccg::core::{GameRng, RandomChoice};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! let picks: Vec<_> = (0..5).map(|_| rng.choose(6)).collect();
//! let repeat: Vec<_> = (0..5).map(|_| again.choose(6)).collect();
//! assert_eq!(picks, repeat);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pick one of N.
///
/// `choose(bound)` returns an index in `0..bound`. Callers never pass a
/// bound of zero.
pub trait RandomChoice {
    fn choose(&mut self, bound: usize) -> usize;
}

impl<R: RandomChoice + ?Sized> RandomChoice for Box<R> {
    fn choose(&mut self, bound: usize) -> usize {
        (**self).choose(bound)
    }
}

/// Fisher-Yates shuffle driven by a `RandomChoice`.
///
/// A scripted source fully determines the resulting order.
pub fn shuffle<T>(slice: &mut [T], choice: &mut dyn RandomChoice) {
    for i in (1..slice.len()).rev() {
        let j = choice.choose(i + 1);
        slice.swap(i, j);
    }
}

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while maintaining good quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Variants
    /// fork once per strategy that needs randomness.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl RandomChoice for GameRng {
    fn choose(&mut self, bound: usize) -> usize {
        self.gen_range_usize(0..bound)
    }
}

/// Replays a fixed list of picks.
///
/// Each pick is reduced modulo the requested bound. Once the script runs out
/// every further pick is 0.
///
/// ```
/// use stone_ccg::core::{RandomChoice, ScriptedChoice};
///
/// let mut picks = ScriptedChoice::new([2, 7]);
/// assert_eq!(picks.choose(3), 2);
/// assert_eq!(picks.choose(3), 1);
/// assert_eq!(picks.choose(3), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoice {
    picks: VecDeque<usize>,
}

impl ScriptedChoice {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// A source that always picks index 0.
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }

    /// Picks left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomChoice for ScriptedChoice {
    fn choose(&mut self, bound: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.choose(1000), rng2.choose(1000));
        }
    }

    #[test]
    fn test_choose_in_bounds() {
        let mut rng = GameRng::new(7);
        for bound in 1..50 {
            assert!(rng.choose(bound) < bound);
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.choose(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.choose(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();

        shuffle(&mut data, &mut rng);

        assert_ne!(data, (1..=10).collect::<Vec<_>>());
        data.sort_unstable();
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_scripted_shuffle_is_exact() {
        // Always picking 0 rotates the first element to the back.
        let mut data = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut data, &mut ScriptedChoice::first());
        assert_eq!(data, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_scripted_choice_wraps_and_runs_out() {
        let mut picks = ScriptedChoice::new([5, 1]);
        assert_eq!(picks.remaining(), 2);
        assert_eq!(picks.choose(4), 1);
        assert_eq!(picks.choose(4), 1);
        assert_eq!(picks.choose(4), 0);
        assert_eq!(picks.remaining(), 0);
    }
}
