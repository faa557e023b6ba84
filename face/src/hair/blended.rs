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
/// Generates strands that curve between two windows of the face contour
///
/// Each window starts at an offset in `[30, 140)` and is read backwards around the ring from there: the first
/// window moves away from its offset, the second towards it. Both are smoothed into curves of the strand's length,
/// and the strand takes the second curve near its root and the first near its tip (weighted by `(j/len)²`).
///
pub fn generate_blended_hair(face_contour: &ContourRing, num_hair_lines: usize, rng: &mut impl RandomSource) -> Result<Vec<HairStrand>, ShapeError> {
    let len = check_contour(face_contour)?;

    let strands = (0..num_hair_lines)
        .map(|_| {
            let num_hair_points = random_strand_length(20, 5.0, rng);

            let index_offset = rng.uniform_floor(30.0, 140.0);
            let outward = (0..num_hair_points)
                .map(|j| face_contour.wrapped(len - (j as i64 + index_offset)))
                .collect::<Vec<_>>();
            let outward = smooth_polygon(&outward, num_hair_points);

            let index_offset = rng.uniform_floor(30.0, 140.0);
            let inward = (0..num_hair_points)
                .map(|j| face_contour.wrapped(len - (-(j as i64) + index_offset)))
                .collect::<Vec<_>>();
            let inward = smooth_polygon(&inward, num_hair_points);

            (0..num_hair_points)
                .map(|j| {
                    let position = (j as f64) / (num_hair_points as f64);
                    let weight = position * position;

                    outward[j] * weight + inward[j] * (1.0 - weight)
                })
                .collect::<HairStrand>()
        })
        .collect();

    Ok(strands)
}
