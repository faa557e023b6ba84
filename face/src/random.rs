/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::prelude::*;
use rand::rngs::StdRng;

use std::time::{SystemTime, UNIX_EPOCH};

///
/// Source of the uniform draws that every generator in this crate uses
///
/// Generators take a `&mut impl RandomSource` rather than reaching for a global generator, so two calls given
/// sources in the same state produce the same geometry, and concurrent callers only need a source each.
///
pub trait RandomSource {
    ///
    /// Returns a value drawn uniformly from `[0, 1)`
    ///
    fn next_unit(&mut self) -> f64;

    ///
    /// Returns a value drawn uniformly from `[min, max)`
    ///
    /// `min` may be greater than `max`, in which case the value lies in `(max, min]`. When they are equal the
    /// result is exactly `min`.
    ///
    #[inline]
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    ///
    /// A fair coin toss
    ///
    #[inline]
    fn coin(&mut self) -> bool {
        self.chance_above(0.5)
    }

    ///
    /// True if a unit draw is strictly above `threshold` (so `chance_above(0.7)` passes 30% of the time)
    ///
    #[inline]
    fn chance_above(&mut self, threshold: f64) -> bool {
        self.next_unit() > threshold
    }

    ///
    /// Returns `floor(uniform(min, max))` as an integer
    ///
    #[inline]
    fn uniform_floor(&mut self, min: f64, max: f64) -> i64 {
        self.uniform(min, max).floor() as i64
    }
}

///
/// Random source backed by a `rand` generator
///
#[derive(Clone, Debug)]
pub struct RngSource<TRng: Rng> {
    rng: TRng,
}

impl RngSource<StdRng> {
    ///
    /// Creates a source seeded once from the system clock
    ///
    pub fn from_time() -> RngSource<StdRng> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|since_epoch| since_epoch.as_nanos() as u64)
            .unwrap_or(0);

        Self::seeded(seed)
    }

    ///
    /// Creates a source with a fixed seed
    ///
    pub fn seeded(seed: u64) -> RngSource<StdRng> {
        RngSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<TRng: Rng> RngSource<TRng> {
    ///
    /// Wraps an existing generator
    ///
    pub fn new(rng: TRng) -> RngSource<TRng> {
        RngSource { rng }
    }
}

impl<TRng: Rng> RandomSource for RngSource<TRng> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

///
/// Random source that replays a fixed list of unit draws, starting again from the beginning when it runs out
///
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    ///
    /// Creates a source that cycles through the specified values, each of which should be in `[0, 1)`
    ///
    pub fn new(values: Vec<f64>) -> SequenceSource {
        let values = if values.is_empty() { vec![0.0] } else { values };

        SequenceSource { values, position: 0 }
    }

    ///
    /// Creates a source that always returns the same unit value
    ///
    /// A constant 0.5 turns every symmetric jitter (`uniform(-x, x)`) into zero.
    ///
    pub fn constant(value: f64) -> SequenceSource {
        Self::new(vec![value])
    }

    ///
    /// Number of values drawn so far
    ///
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;

        value
    }
}
