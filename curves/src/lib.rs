/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # doodle_curves
//!
//! Deterministic geometry used by the avatar generators: a 2D coordinate type, transforms that operate on
//! whole point lists, and Bezier evaluators for both the usual cubic form and for control polygons of any
//! length.
//!
//! ```
//! # use doodle_curves::*;
//! # use doodle_curves::bezier::*;
//! #
//! let curve       = Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 2.0), Coord2(3.0, 2.0)), Coord2(4.0, 0.0));
//! let mid_point   = curve.point_at_pos(0.5);
//! let samples     = sample_curve(&curve, 100);
//!
//! let smoothed    = smooth_polygon(&samples[0..20], 20);
//! ```
//!
//! Random draws are deliberately absent from this crate: everything here is a pure function of its inputs,
//! which makes it possible to check the evaluators against each other without any fixtures.
//!

#![allow(clippy::redundant_field_names)]

#[macro_use]
mod test_assert;

pub mod bezier;
pub mod consts;
pub mod geo;

pub use self::geo::*;
