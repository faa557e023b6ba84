/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for evaluating Bezier curves
//!
//! ```
//! # use doodle_curves::*;
//! # use doodle_curves::bezier::*;
//! #
//! let curve           = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
//!
//! let mid_point       = curve.point_at_pos(0.5);
//! let same_point      = polygon_point_at_pos(&[Coord2(1.0, 2.0), Coord2(2.0, 0.0), Coord2(3.0, 5.0), Coord2(4.0, 2.0)], 0.5);
//! let eyelid          = sample_curve(&curve, 100);
//! ```
//!
//! There are two evaluators. `basis()` is the closed form for a cubic curve and is what the `Curve` type and
//! the `BezierCurve` trait use. `polygon_point_at_pos()` evaluates the Bernstein form for a control polygon of any
//! length, and `smooth_polygon()` uses it to turn a list of sampled points into a smooth curve through the first
//! and last of them. The two agree when the polygon has four points.
//!

mod basis;
mod binomial;
mod curve;
mod polygon;
mod sample;

pub use basis::*;
pub use binomial::*;
pub use curve::*;
pub use polygon::*;
pub use sample::*;

pub use super::geo::*;
