// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Cyclic shuffler: an endless sequence over a fixed set of items.
//!
//! Every item is visited exactly once per pass, and the working order is
//! re-randomized at the start of each pass (including the first). The
//! shuffler performs no I/O; callers poll [`CycleShuffler::next`] and can
//! watch [`CycleShuffler::pass`] to announce reshuffles themselves.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

/// Errors from shuffler construction
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleError {
    /// The shuffler needs at least one item to cycle over
    #[error("cannot cycle over an empty list")]
    Empty,
}

/// Endless reshuffle-on-wraparound sequence.
///
/// Holds a working copy of the input; the order of the caller's own list
/// is never touched.
#[derive(Debug, Clone)]
pub struct CycleShuffler<T> {
    order: Vec<T>,
    position: usize,
    pass: u64,
    rng: StdRng,
}

impl<T: Clone> CycleShuffler<T> {
    /// Create a shuffler over `items`, seeded from system entropy.
    pub fn new(items: Vec<T>) -> Result<Self, ShuffleError> {
        Self::with_rng(items, StdRng::from_entropy())
    }

    /// Create a shuffler with a fixed seed. Tests use this to make the
    /// permutation reproducible; the cycle properties hold for any seed.
    pub fn with_seed(items: Vec<T>, seed: u64) -> Result<Self, ShuffleError> {
        Self::with_rng(items, StdRng::seed_from_u64(seed))
    }

    fn with_rng(items: Vec<T>, rng: StdRng) -> Result<Self, ShuffleError> {
        if items.is_empty() {
            return Err(ShuffleError::Empty);
        }
        Ok(Self {
            order: items,
            position: 0,
            pass: 0,
            rng,
        })
    }

    /// Produce the next item, reshuffling the working order whenever a
    /// new pass begins. Never exhausted.
    pub fn next(&mut self) -> T {
        if self.position == 0 {
            self.order.shuffle(&mut self.rng);
            self.pass += 1;
        }

        let item = self.order[self.position].clone();
        self.position = (self.position + 1) % self.order.len();
        item
    }

    /// Number of passes started so far (1 after the first call to `next`)
    pub fn pass(&self) -> u64 {
        self.pass
    }

    /// Number of items per pass
    pub fn len(&self) -> usize {
        self.order.len()
    }
}
