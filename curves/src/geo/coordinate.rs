/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Represents a value that can be used as a coordinate in a space
///
/// Bezier evaluation only needs to add points together and scale them by a weight, so this is what the
/// trait requires.
///
pub trait Coordinate:
    Sized + Copy + Add<Self, Output = Self> + Sub<Self, Output = Self> + Mul<f64, Output = Self> + PartialEq
{
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    fn distance_to(&self, target: &Self) -> f64 {
        let offset = *self - *target;

        (0..Self::len())
            .map(|component| offset.get(component))
            .map(|component| component * component)
            .sum::<f64>()
            .sqrt()
    }

    ///
    /// Returns true if this point is within `max_distance` of another point
    ///
    #[inline]
    fn is_near_to(&self, target: &Self, max_distance: f64) -> bool {
        self.distance_to(target) <= max_distance
    }

    ///
    /// Finds the dot product of two vectors
    ///
    fn dot(&self, target: &Self) -> f64 {
        (0..Self::len())
            .map(|component| self.get(component) * target.get(component))
            .sum()
    }
}
