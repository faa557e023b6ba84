/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use crate::geo::*;

///
/// Trait implemented by things representing a cubic bezier curve
///
pub trait BezierCurve: Geo + Clone + Sized {
    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// The control points in this curve
    ///
    fn control_points(&self) -> (Self::Point, Self::Point);

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let start = self.start_point();
        let end = self.end_point();
        let (cp1, cp2) = self.control_points();

        basis(t, start, cp1, cp2, end)
    }
}

///
/// Trait implemented by bezier curves that can create new versions of themselves
///
pub trait BezierCurveFactory: BezierCurve {
    ///
    /// Creates a new bezier curve of the same type from some points
    ///
    fn from_points(start: Self::Point, control_points: (Self::Point, Self::Point), end: Self::Point) -> Self;
}

///
/// Represents a cubic Bezier curve
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve<Coord: Coordinate> {
    pub start_point: Coord,
    pub end_point: Coord,
    pub control_points: (Coord, Coord),
}

impl<Coord: Coordinate> Geo for Curve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> BezierCurveFactory for Curve<Coord> {
    fn from_points(start: Coord, (control_point1, control_point2): (Coord, Coord), end: Coord) -> Self {
        Curve {
            start_point: start,
            end_point: end,
            control_points: (control_point1, control_point2),
        }
    }
}

impl<Coord: Coordinate> BezierCurve for Curve<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord, Coord) {
        self.control_points
    }
}
