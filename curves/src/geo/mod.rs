/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Traits for basic geometric definitions
//!
//! The `Coordinate` trait describes anything that can be weighted and summed, which is all a Bezier evaluator
//! needs. `Coord2` is the 2D point used for every contour, eyelid, mouth and strand in this workspace.
//!
//! Point lists are transformed as whole values (`translate_points()`, `rotate_points()`, `scale_points()`,
//! `recenter_points()`): curves are produced once by sampling and are only changed afterwards by these passes.
//!

mod coord2;
mod coordinate;
mod geo;
mod transform;

pub use self::coord2::*;
pub use self::coordinate::*;
pub use self::geo::*;
pub use self::transform::*;
