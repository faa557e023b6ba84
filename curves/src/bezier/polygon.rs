/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::binomial::*;
use crate::geo::*;

///
/// Evaluates the bezier curve defined by a control polygon of any length at position t
///
/// This is the Bernstein form `Σ C(n,i)(1-t)^(n-i) t^i P_i`. An empty polygon evaluates to the origin.
///
pub fn polygon_point_at_pos<Point: Coordinate>(control_points: &[Point], t: f64) -> Point {
    if control_points.is_empty() {
        return Point::origin();
    }

    let degree = control_points.len() - 1;
    let one_minus_t = 1.0 - t;

    control_points
        .iter()
        .enumerate()
        .fold(Point::origin(), |total, (index, point)| {
            let weight = binomial(degree, index)
                * one_minus_t.powi((degree - index) as i32)
                * t.powi(index as i32);

            total + *point * weight
        })
}

///
/// Treats a list of points as a control polygon and samples the curve it defines at `number_of_points+1`
/// evenly spaced positions, from t=0 to t=1 inclusive
///
pub fn smooth_polygon<Point: Coordinate>(control_points: &[Point], number_of_points: usize) -> Vec<Point> {
    if control_points.is_empty() {
        return vec![];
    }

    if number_of_points == 0 {
        return vec![control_points[0]];
    }

    let smoothed = (0..=number_of_points)
        .map(|index| (index as f64) / (number_of_points as f64))
        .map(|t| polygon_point_at_pos(control_points, t))
        .collect::<Vec<_>>();

    test_assert!(smoothed.len() == number_of_points + 1);

    smoothed
}
