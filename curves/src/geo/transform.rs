/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;
use super::coordinate::*;

///
/// Returns the mean of a list of points (the origin for an empty list)
///
pub fn centroid<Point: Coordinate>(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::origin();
    }

    let total = points.iter().fold(Point::origin(), |total, point| total + *point);
    total * (1.0 / points.len() as f64)
}

///
/// Moves every point in a list by the same offset
///
pub fn translate_points<Point: Coordinate>(points: &[Point], offset: Point) -> Vec<Point> {
    points.iter().map(|point| *point + offset).collect()
}

///
/// Scales every point in a list about the origin
///
pub fn scale_points<Point: Coordinate>(points: &[Point], factor: f64) -> Vec<Point> {
    points.iter().map(|point| *point * factor).collect()
}

///
/// Rotates every point in a list about the origin by an angle in radians
///
pub fn rotate_points(points: &[Coord2], angle: f64) -> Vec<Coord2> {
    points.iter().map(|point| point.rotate(angle)).collect()
}

///
/// Moves a list of points so that its centroid is at the origin, returning the new points and the original centroid
///
pub fn recenter_points<Point: Coordinate>(points: &[Point]) -> (Vec<Point>, Point) {
    let center = centroid(points);
    let recentered = points.iter().map(|point| *point - center).collect();

    (recentered, center)
}
