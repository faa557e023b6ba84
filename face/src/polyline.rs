/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use doodle_curves::*;
use itertools::*;

///
/// Rounds a value to two decimal places (negative zero becomes zero)
///
#[inline]
pub fn round_to_hundredths(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;

    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

///
/// Rounds every coordinate in a list of points to two decimal places
///
pub fn round_points(points: &[Coord2]) -> Vec<Coord2> {
    points
        .iter()
        .map(|Coord2(x, y)| Coord2(round_to_hundredths(*x), round_to_hundredths(*y)))
        .collect()
}

///
/// Formats a list of points as `x,y x,y ...`, the form taken by a vector polyline's point list
///
pub fn to_points_attribute(points: &[Coord2]) -> String {
    round_points(points)
        .into_iter()
        .map(|Coord2(x, y)| format!("{},{}", x, y))
        .join(" ")
}
