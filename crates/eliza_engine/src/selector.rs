//! Sources of response choices.
//!
//! The responder never touches a global random generator. It asks a
//! [`Selector`] which of a rule's templates to use, so a conversation can be
//! seeded, replayed, or scripted exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks one of `len` alternatives.
pub trait Selector {
    /// Returns an index in `0..len`. `len` is never zero.
    fn select(&mut self, len: usize) -> usize;
}

impl<S: Selector + ?Sized> Selector for &mut S {
    fn select(&mut self, len: usize) -> usize {
        (**self).select(len)
    }
}

impl<S: Selector + ?Sized> Selector for Box<S> {
    fn select(&mut self, len: usize) -> usize {
        (**self).select(len)
    }
}

// =============================================================================
// Random Selector
// =============================================================================

/// Uniform choice backed by a random number generator.
#[derive(Clone, Debug)]
pub struct RandomSelector<R = ChaCha8Rng> {
    rng: R,
}

impl RandomSelector<ChaCha8Rng> {
    /// Creates a deterministic selector from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Selector for RandomSelector<R> {
    fn select(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

// =============================================================================
// Sequence Selector
// =============================================================================

/// Replays a fixed list of choices, cycling when exhausted.
///
/// Each scripted index is reduced modulo the number of alternatives, so any
/// script is valid for any rule. An empty script always picks the first
/// alternative.
#[derive(Clone, Debug, Default)]
pub struct SequenceSelector {
    choices: Vec<usize>,
    position: usize,
}

impl SequenceSelector {
    /// Creates a selector that replays `choices`.
    #[must_use]
    pub fn new(choices: impl Into<Vec<usize>>) -> Self {
        Self {
            choices: choices.into(),
            position: 0,
        }
    }

    /// Number of selections made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.position
    }
}

impl Selector for SequenceSelector {
    fn select(&mut self, len: usize) -> usize {
        let choice = if self.choices.is_empty() {
            0
        } else {
            self.choices[self.position % self.choices.len()]
        };
        self.position += 1;
        choice % len
    }
}
