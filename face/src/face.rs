/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::egg::*;
use crate::error::*;
use crate::random::*;
use crate::ring::*;

use doodle_curves::*;
use log::debug;
use serde_derive::Serialize;

///
/// The randomised parameters for the two eggs that are blended into a face
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FaceShapeParameters {
    /// The two egg shapes
    pub eggs: [EggShape; 2],

    /// Offset applied to every point of each egg before blending
    pub offsets: [Coord2; 2],
}

///
/// A face contour and the measurements the other features are placed from
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct FaceContour {
    /// The closed contour, centred on the origin
    pub ring: ContourRing,

    /// Horizontal distance between the first point and the point half way around the contour
    pub width: f64,

    /// Vertical distance between the points a quarter and three quarters of the way around the contour
    pub height: f64,

    /// Centroid of the blended contour before it was moved to the origin
    pub center: Coord2,
}

impl FaceShapeParameters {
    ///
    /// Draws a random set of face parameters
    ///
    pub fn random(rng: &mut impl RandomSource) -> FaceShapeParameters {
        let size_x0 = rng.uniform(50.0, 100.0);
        let size_y0 = rng.uniform(70.0, 100.0);
        let size_y1 = rng.uniform(50.0, 80.0);
        let size_x1 = rng.uniform(70.0, 100.0);
        let k0 = random_skew(rng);
        let k1 = random_skew(rng);

        let translate_x0 = rng.uniform(-5.0, 5.0);
        let translate_y0 = rng.uniform(-15.0, 15.0);
        let translate_y1 = rng.uniform(-5.0, 5.0);
        let translate_x1 = rng.uniform(-5.0, 25.0);

        FaceShapeParameters {
            eggs: [EggShape::new(size_x0, size_y0, k0), EggShape::new(size_x1, size_y1, k1)],
            offsets: [Coord2(translate_x0, translate_y0), Coord2(translate_x1, translate_y1)],
        }
    }
}

///
/// Skew in `±[0.001, 0.005]`, with the sign chosen by a coin toss
///
fn random_skew(rng: &mut impl RandomSource) -> f64 {
    let magnitude = rng.uniform(0.001, 0.005);

    if rng.coin() {
        magnitude
    } else {
        -magnitude
    }
}

///
/// Generates a random face contour from two eggs sampled at `segment_points` points per half
///
pub fn generate_face_contour(segment_points: usize, rng: &mut impl RandomSource) -> Result<FaceContour, ShapeError> {
    let parameters = FaceShapeParameters::random(rng);

    face_contour_from_parameters(&parameters, segment_points, EggJitter::FULL, rng)
}

///
/// Generates a face contour from a known set of parameters
///
pub fn face_contour_from_parameters(
    parameters: &FaceShapeParameters,
    segment_points: usize,
    jitter: EggJitter,
    rng: &mut impl RandomSource,
) -> Result<FaceContour, ShapeError> {
    let egg0 = parameters.eggs[0].points(segment_points, EggLayout::MirroredHalves, jitter, rng)?;
    let egg1 = parameters.eggs[1].points(segment_points, EggLayout::MirroredHalves, jitter, rng)?;

    let egg0 = translate_points(&egg0, parameters.offsets[0]);
    let egg1 = translate_points(&egg1, parameters.offsets[1]);

    blend_face_contour(&egg0, &egg1)
}

///
/// Blends two contours of the same length into a face
///
/// The second contour is read a quarter of the way ahead and rotated by 90° before it is mixed in:
/// `new = (0.5·c0[i].x + 0.5·c1[j].y, 0.5·c0[i].y - 0.5·c1[j].x)` where `j = (i + N/4) mod N`.
///
pub fn blend_face_contour(contour0: &[Coord2], contour1: &[Coord2]) -> Result<FaceContour, ShapeError> {
    let len = contour0.len();
    if len < 4 || contour1.len() != len {
        return Err(ShapeError::DegenerateContour);
    }

    let blended = contour0
        .iter()
        .enumerate()
        .map(|(index, point0)| {
            let point1 = contour1[(index + len / 4) % len];
            Coord2(point0.x() * 0.5 + point1.y() * 0.5, point0.y() * 0.5 - point1.x() * 0.5)
        })
        .collect::<Vec<_>>();

    let (face, center) = recenter_points(&blended);

    let width = (face[0].x() - face[len / 2].x()).abs();
    let height = (face[len / 4].y() - face[len * 3 / 4].y()).abs();

    debug!("Face contour: {} points, width {:.2}, height {:.2}", len, width, height);

    Ok(FaceContour {
        ring: ContourRing::close(face)?,
        width,
        height,
        center,
    })
}
