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
/// Generates strands that fall away from a parting
///
/// Offsets are drawn from `[10, 180)` and sorted; a single split point in `[0, 200)` decides which way round the ring
/// each strand runs. Strands step two contour points at a time and only their x coordinates are tapered, with
/// `lower ∈ [1, 2.3)` most of the time and `lower ∈ [0, 1)` for the occasional short wisp.
///
pub fn generate_parted_hair(face_contour: &ContourRing, num_hair_lines: usize, rng: &mut impl RandomSource) -> Result<Vec<HairStrand>, ShapeError> {
    let len = check_contour(face_contour)?;
    let offsets = sorted_offsets(num_hair_lines, 10.0, 180.0, rng);
    let split_point = rng.uniform_floor(0.0, 200.0);

    let strands = offsets
        .into_iter()
        .map(|index_offset| {
            let num_hair_points = random_strand_length(30, 8.0, rng);

            let mut lower = rng.uniform(1.0, 2.3);
            if rng.chance_above(0.9) {
                lower = rng.uniform(0.0, 1.0);
            }

            let direction = if index_offset > split_point { -1 } else { 1 };

            let control_polygon = (0..num_hair_points)
                .map(|j| {
                    let powerscale = rng.uniform(0.1, 3.0);
                    let portion = taper_portion(j, num_hair_points, powerscale, lower);
                    let point = face_contour.wrapped(len - (direction * j as i64 * 2 + index_offset));

                    Coord2(point.x() * portion, point.y())
                })
                .collect::<Vec<_>>();

            smooth_polygon(&control_polygon, num_hair_points)
        })
        .collect();

    Ok(strands)
}
