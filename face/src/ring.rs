/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;

use doodle_curves::*;
use serde_derive::Serialize;

///
/// A closed contour whose last two points repeat its first two
///
/// The contour is cyclic: indexes into it wrap around modulo the 'open' length (the number of points before
/// the repeated pair).
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ContourRing {
    points: Vec<Coord2>,
}

impl ContourRing {
    ///
    /// Closes a list of points by repeating the first two at the end
    ///
    pub fn close(mut open_points: Vec<Coord2>) -> Result<ContourRing, ShapeError> {
        if open_points.len() < 2 {
            return Err(ShapeError::DegenerateContour);
        }

        let (first, second) = (open_points[0], open_points[1]);
        open_points.push(first);
        open_points.push(second);

        Ok(ContourRing { points: open_points })
    }

    ///
    /// Creates a ring from a list of points that already ends with a copy of its first two
    ///
    pub fn from_closed(points: Vec<Coord2>) -> Result<ContourRing, ShapeError> {
        let len = points.len();

        if len < 4 || points[len - 2] != points[0] || points[len - 1] != points[1] {
            return Err(ShapeError::DegenerateContour);
        }

        Ok(ContourRing { points })
    }

    ///
    /// Every point in the ring, including the closing pair
    ///
    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    ///
    /// The points in the ring without the closing pair
    ///
    #[inline]
    pub fn open_points(&self) -> &[Coord2] {
        &self.points[0..self.open_len()]
    }

    ///
    /// Number of distinct points in the ring
    ///
    #[inline]
    pub fn open_len(&self) -> usize {
        self.points.len() - 2
    }

    ///
    /// Retrieves a point, wrapping the index (which may be negative) around the open length
    ///
    #[inline]
    pub fn wrapped(&self, index: i64) -> Coord2 {
        let len = self.open_len() as i64;
        self.points[index.rem_euclid(len) as usize]
    }
}
