/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Computes the bezier weighting function for a cubic curve with control points w1..w4 at position t
///
#[inline]
pub fn basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared = t * t;
    let t_cubed = t_squared * t;

    let one_minus_t = 1.0 - t;
    let one_minus_t_squared = one_minus_t * one_minus_t;
    let one_minus_t_cubed = one_minus_t_squared * one_minus_t;

    w1 * one_minus_t_cubed
        + w2 * (3.0 * one_minus_t_squared * t)
        + w3 * (3.0 * one_minus_t * t_squared)
        + w4 * t_cubed
}
