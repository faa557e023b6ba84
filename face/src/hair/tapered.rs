/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sampling::*;
use super::HairStrand;
use crate::consts::*;
use crate::error::*;
use crate::random::*;
use crate::ring::*;

use doodle_curves::bezier::*;
use log::trace;

///
/// True if `next` starts within `max_distance` of the end of `previous`
///
pub fn within_merge_distance(previous: &[Coord2], next: &[Coord2], max_distance: f64) -> bool {
    match (previous.last(), next.first()) {
        (Some(end), Some(start)) => end.distance_to(start) < max_distance,
        _ => false,
    }
}

///
/// Adds a strand to a list of strands, either continuing the last strand or starting a new one
///
/// The strand continues the last one only when `join_allowed` is set and it starts within `HAIR_MERGE_DISTANCE` of
/// where the last one ends.
///
pub fn fold_strand(mut strands: Vec<HairStrand>, strand: HairStrand, join_allowed: bool) -> Vec<HairStrand> {
    match strands.last_mut() {
        Some(previous) if join_allowed && within_merge_distance(previous, &strand, HAIR_MERGE_DISTANCE) => {
            trace!("Joining strand of {} points onto strand of {} points", strand.len(), previous.len());
            previous.extend(strand);
        }

        _ => strands.push(strand),
    }

    strands
}

///
/// Generates one tapered strand starting at `index_offset`
///
fn tapered_strand(face_contour: &ContourRing, len: i64, index_offset: i64, rng: &mut impl RandomSource) -> HairStrand {
    let num_hair_points = random_strand_length(20, 5.0, rng);
    let lower = rng.uniform(0.8, 1.4);
    let direction = if rng.coin() { -1 } else { 1 };

    let control_polygon = (0..num_hair_points)
        .map(|j| {
            let powerscale = rng.uniform(0.1, 3.0);
            let portion = taper_portion(j, num_hair_points, powerscale, lower);
            let point = face_contour.wrapped(len - (direction * j as i64 + index_offset));

            point * portion
        })
        .collect::<Vec<_>>();

    let mut strand = smooth_polygon(&control_polygon, num_hair_points);
    if rng.chance_above(0.7) {
        strand.reverse();
    }

    strand
}

///
/// Generates tapered strands from sorted offsets in `[10, 180)`, joining neighbouring strands into locks
///
/// Each strand walks the ring in a random direction from its offset, scaling each point about the origin by a
/// power-law taper between 1 and `lower ∈ [0.8, 1.4)`. A strand is appended to the one before it when a coin toss
/// allows it and the two ends are less than `HAIR_MERGE_DISTANCE` apart.
///
pub fn generate_tapered_hair(face_contour: &ContourRing, num_hair_lines: usize, rng: &mut impl RandomSource) -> Result<Vec<HairStrand>, ShapeError> {
    let len = check_contour(face_contour)?;
    let offsets = sorted_offsets(num_hair_lines, 10.0, 180.0, rng);

    let strands = offsets.into_iter().fold(vec![], |strands: Vec<HairStrand>, index_offset| {
        let strand = tapered_strand(face_contour, len, index_offset, rng);
        let join_allowed = !strands.is_empty() && !rng.coin();

        fold_strand(strands, strand, join_allowed)
    });

    Ok(strands)
}
