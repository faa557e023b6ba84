/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::random::*;
use crate::ring::*;

use itertools::*;

///
/// Number of points in a strand: `base` plus `floor(uniform(-spread, spread))`
///
pub fn random_strand_length(base: usize, spread: f64, rng: &mut impl RandomSource) -> usize {
    let length = base as i64 + rng.uniform_floor(-spread, spread);

    length.max(1) as usize
}

///
/// Draws `count` ring offsets from `[min, max)` and sorts them into ascending order
///
pub fn sorted_offsets(count: usize, min: f64, max: f64, rng: &mut impl RandomSource) -> Vec<i64> {
    (0..count).map(|_| rng.uniform_floor(min, max)).sorted().collect()
}

///
/// Scale factor for the point at `index` along a strand of `length` points
///
/// This is `(1 - (index/length)^powerscale)·(1 - lower) + lower`: 1 at the root, moving towards `lower` at the tip.
///
#[inline]
pub fn taper_portion(index: usize, length: usize, powerscale: f64, lower: f64) -> f64 {
    let position = (index as f64) / (length as f64);

    (1.0 - position.powf(powerscale)) * (1.0 - lower) + lower
}

///
/// Ensures that a face contour has points to sample
///
#[inline]
pub(crate) fn check_contour(face_contour: &ContourRing) -> Result<i64, ShapeError> {
    match face_contour.open_len() {
        0 => Err(ShapeError::DegenerateContour),
        len => Ok(len as i64),
    }
}
