/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::egg::*;
use crate::error::*;
use crate::random::*;

use doodle_curves::bezier::*;
use serde_derive::{Deserialize, Serialize};

use std::f64;

///
/// The shapes a mouth can take
///
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MouthVariant {
    /// A curve between two corners, pulled down towards the chin
    Smile,

    /// The smile curve flipped vertically, shrunk and moved up
    CompressedInverse,

    /// A small closed egg, rotated slightly
    Open,
}

impl MouthVariant {
    /// Every mouth variant, in the order their weights are configured
    pub const ALL: [MouthVariant; 3] = [MouthVariant::Smile, MouthVariant::CompressedInverse, MouthVariant::Open];

    ///
    /// Generates a mouth of this shape for a face of the specified size
    ///
    pub fn generate(&self, face_height: f64, face_width: f64, rng: &mut impl RandomSource) -> Result<Vec<Coord2>, ShapeError> {
        match self {
            MouthVariant::Smile => Ok(generate_smile_mouth(face_height, face_width, rng)),
            MouthVariant::CompressedInverse => Ok(generate_compressed_mouth(face_height, face_width, rng)),
            MouthVariant::Open => generate_open_mouth(face_height, face_width, rng),
        }
    }
}

///
/// Draws the corners and control points for a curved mouth, with corner heights in `[h/7, h/max_height_divisor]`
///
fn random_mouth_curve(face_height: f64, face_width: f64, max_height_divisor: f64, rng: &mut impl RandomSource) -> Curve<Coord2> {
    let mouth_right_y = rng.uniform(face_height / 7.0, face_height / max_height_divisor);
    let mouth_left_y = rng.uniform(face_height / 7.0, face_height / max_height_divisor);
    let mouth_right_x = rng.uniform(face_width / 10.0, face_width / 2.0);
    let mouth_left_x = -mouth_right_x + rng.uniform(-face_width / 20.0, face_width / 20.0);

    let mouth_right = Coord2(mouth_right_x, mouth_right_y);
    let mouth_left = Coord2(mouth_left_x, mouth_left_y);

    let control_point0 = Coord2(
        rng.uniform(0.0, mouth_right_x),
        rng.uniform(mouth_left_y + 5.0, face_height / 1.5),
    );
    let control_point1 = Coord2(
        rng.uniform(mouth_left_x, 0.0),
        rng.uniform(mouth_left_y + 5.0, face_height / 1.5),
    );

    Curve::from_points(mouth_left, (control_point1, control_point0), mouth_right)
}

///
/// Generates the 'smile' mouth: a cubic curve from the left corner to the right corner
///
pub fn generate_smile_mouth(face_height: f64, face_width: f64, rng: &mut impl RandomSource) -> Vec<Coord2> {
    let curve = random_mouth_curve(face_height, face_width, 3.5, rng);

    sample_curve(&curve, MOUTH_STEPS)
}

///
/// Generates the 'compressed inverse' mouth: a flatter smile that's flipped, scaled down and moved up
///
pub fn generate_compressed_mouth(face_height: f64, face_width: f64, rng: &mut impl RandomSource) -> Vec<Coord2> {
    let curve = random_mouth_curve(face_height, face_width, 4.0, rng);
    let points = sample_curve(&curve, MOUTH_STEPS);

    let center = Coord2(
        (curve.start_point().x() + curve.end_point().x()) / 2.0,
        (points[MOUTH_STEPS / 4].y() + points[MOUTH_STEPS * 3 / 4].y()) / 2.0,
    );

    compress_and_invert(&points, center)
}

///
/// Flips a list of points vertically about `center`, scales them by 0.6 and moves them back to `(center.x, 0.8·center.y)`
///
pub fn compress_and_invert(points: &[Coord2], center: Coord2) -> Vec<Coord2> {
    let target = Coord2(center.x(), center.y() * 0.8);

    points
        .iter()
        .map(|point| (*point - center).flip_y() * 0.6 + target)
        .collect()
}

///
/// Generates the 'open' mouth: an egg rotated by up to `π/9.5` and moved into the lower half of the face
///
pub fn generate_open_mouth(face_height: f64, face_width: f64, rng: &mut impl RandomSource) -> Result<Vec<Coord2>, ShapeError> {
    let center = Coord2(
        rng.uniform(-face_width / 8.0, face_width / 8.0),
        rng.uniform(face_height / 4.0, face_height / 2.5),
    );

    let egg = EggShape::new(
        rng.uniform(face_width / 4.0, face_width / 10.0),
        rng.uniform(face_height / 10.0, face_height / 20.0),
        MOUTH_EGG_K,
    );
    let points = egg.points(MOUTH_EGG_SEGMENT_POINTS, EggLayout::Quadrants, EggJitter::ANGLE, rng)?;

    let rotation = rng.uniform(-f64::consts::PI / 9.5, f64::consts::PI / 9.5);

    Ok(translate_points(&rotate_points(&points, rotation), center))
}
