//! Names for newly landed rovers.
//!
//! Every rover on a plateau gets a distinct name from a finite [`NamePool`]. Names are
//! never returned to the pool, so the size of the pool caps the number of rovers. Which
//! of the remaining names a new rover gets is up to a [`NameSelector`].

use std::iter::FromIterator;

#[cfg(feature = "rng_gen")]
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Names used when none are given, picked from the public poll to name Curiosity.
pub const DEFAULT_NAMES: &[&str] = &["Curiosity", "Pursuit", "Vision"];

/// Ordered set of names not yet given to a rover.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Build a pool from the given names. Duplicates are dropped, keeping the first
    /// occurrence, so that every rover drawn from the pool has a distinct name.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut pool = Vec::new();
        for name in names {
            let name = name.into();
            if !pool.contains(&name) {
                pool.push(name);
            }
        }
        Self { names: pool }
    }

    /// Number of names left.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names are left.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate the names left, in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Remove a name chosen by `selector` and return it. Returns `None` without
    /// consulting the selector if the pool is empty.
    pub(super) fn draw<S: NameSelector + ?Sized>(
        &mut self,
        selector: &mut S,
    ) -> Option<String> {
        if self.names.is_empty() {
            return None;
        }
        // Selectors are supposed to stay in range, but don't trust them.
        let idx = selector.select(&self.names) % self.names.len();
        Some(self.names.remove(idx))
    }
}

impl Default for NamePool {
    /// Pool of the [`DEFAULT_NAMES`].
    fn default() -> Self {
        Self::new(DEFAULT_NAMES.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for NamePool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Strategy for picking which of the remaining names the next rover gets.
pub trait NameSelector {
    /// Return the index of the chosen name in `remaining`. Only called with a non-empty
    /// slice. Out of range indexes wrap around.
    fn select(&mut self, remaining: &[String]) -> usize;
}

impl<S: NameSelector + ?Sized> NameSelector for &mut S {
    fn select(&mut self, remaining: &[String]) -> usize {
        (**self).select(remaining)
    }
}

impl<S: NameSelector + ?Sized> NameSelector for Box<S> {
    fn select(&mut self, remaining: &[String]) -> usize {
        (**self).select(remaining)
    }
}

/// Always picks the first remaining name, so rovers are named in pool order.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InOrder;

impl NameSelector for InOrder {
    fn select(&mut self, _remaining: &[String]) -> usize {
        0
    }
}

/// Picks uniformly among the remaining names using the wrapped random number generator.
#[cfg(feature = "rng_gen")]
#[derive(Debug, Clone)]
pub struct RandomNames<R = StdRng> {
    rng: R,
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> RandomNames<R> {
    /// Draw names with the given generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Extract the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "rng_gen")]
impl RandomNames<StdRng> {
    /// Draw names from a generator seeded with `seed`. The same seed and pool always
    /// produce the same names.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Draw names from a generator seeded by the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> NameSelector for RandomNames<R> {
    fn select(&mut self, remaining: &[String]) -> usize {
        self.rng.gen_range(0, remaining.len())
    }
}
