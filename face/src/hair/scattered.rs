/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sampling::*;
use super::HairStrand;
use crate::error::*;
use crate::random::*;
use crate::ring::*;

use doodle_curves::bezier::*;

///
/// Generates spiky strands from control polygons made of unrelated contour points
///
/// Every control point is read from its own random offset in `[20, 160)`, so a strand of length `n` has `n + 1`
/// control points scattered around the upper part of the face.
///
pub fn generate_scattered_hair(face_contour: &ContourRing, num_hair_lines: usize, rng: &mut impl RandomSource) -> Result<Vec<HairStrand>, ShapeError> {
    let len = check_contour(face_contour)?;

    let strands = (0..num_hair_lines)
        .map(|_| {
            let num_hair_points = random_strand_length(20, 5.0, rng);

            let control_polygon = (0..=num_hair_points)
                .map(|_| face_contour.wrapped(len - rng.uniform_floor(20.0, 160.0)))
                .collect::<Vec<_>>();

            smooth_polygon(&control_polygon, num_hair_points)
        })
        .collect();

    Ok(strands)
}
