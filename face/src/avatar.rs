/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::config::*;
use crate::error::*;
use crate::eye::*;
use crate::face::*;
use crate::hair::*;
use crate::mouth::*;
use crate::random::*;

use doodle_curves::*;
use log::debug;
use serde_derive::Serialize;

///
/// An eye along with where it sits on the face
///
/// The lids, clip contour and pupil are in the eye's own coordinates; `position` is the translation that places
/// the eye on the face.
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PlacedEye {
    pub shape: EyeShape,
    pub clip_contour: Vec<Coord2>,
    pub position: Coord2,
    pub pupil: Coord2,
}

///
/// The two nostril centres
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize)]
pub struct Nose {
    pub left: Coord2,
    pub right: Coord2,
}

///
/// The geometry for every feature of one avatar
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Avatar {
    pub face: FaceContour,
    pub left_eye: PlacedEye,
    pub right_eye: PlacedEye,
    pub hair: Vec<HairStrand>,
    pub hair_strategies: Vec<HairStrategy>,
    pub nose: Nose,
    pub mouth_variant: MouthVariant,
    pub mouth: Vec<Coord2>,
}

impl Avatar {
    ///
    /// Generates a complete avatar
    ///
    pub fn generate(config: &AvatarConfig, rng: &mut impl RandomSource) -> Result<Avatar, ShapeError> {
        let face = generate_face_contour(config.face_points, rng)?;
        let (width, height) = (face.width, face.height);

        let eyes = generate_both_eyes(width / 2.0, rng);
        let (left_position, right_position) = eye_positions(&face, rng);

        let left_pupil_choice = PupilChoice::random(&eyes.left, rng);
        let right_pupil_choice = PupilChoice::random(&eyes.right, rng);

        let left_eye = PlacedEye {
            clip_contour: eyes.left.clip_contour(),
            pupil: left_pupil_choice.pupil(&eyes.left),
            position: left_position,
            shape: eyes.left,
        };
        let right_eye = PlacedEye {
            clip_contour: eyes.right.clip_contour(),
            pupil: right_pupil_choice.pupil(&eyes.right),
            position: right_position,
            shape: eyes.right,
        };

        let (hair_strategies, hair) = generate_hair(&face, &config.hair, rng)?;

        let nose = random_nose(width, height, rng);

        let mouth_variant = choose_mouth_variant(&config.mouth_weights, rng);
        let mouth = mouth_variant.generate(height, width, rng)?;

        debug!(
            "Avatar: face {:.2}x{:.2}, {} hair strands from {:?}, {:?} mouth",
            width,
            height,
            hair.len(),
            hair_strategies,
            mouth_variant
        );

        Ok(Avatar {
            face,
            left_eye,
            right_eye,
            hair,
            hair_strategies,
            nose,
            mouth_variant,
            mouth,
        })
    }
}

///
/// Where the left and right eyes are placed relative to the face
///
fn eye_positions(face: &FaceContour, rng: &mut impl RandomSource) -> (Coord2, Coord2) {
    let (width, height, center) = (face.width, face.height, face.center);

    let distance_between_eyes = rng.uniform(width / 4.5, width / 4.0);
    let eye_height_offset = rng.uniform(height / 8.0, height / 6.0);
    let left_offset = Coord2(rng.uniform(-width / 20.0, width / 10.0), rng.uniform(-height / 50.0, height / 50.0));
    let right_offset = Coord2(rng.uniform(-width / 20.0, width / 10.0), rng.uniform(-height / 50.0, height / 50.0));

    let left = Coord2(
        -(center.x() + distance_between_eyes + left_offset.x()),
        -(-center.y() + eye_height_offset + left_offset.y()),
    );
    let right = Coord2(
        center.x() + distance_between_eyes + right_offset.x(),
        -(-center.y() + eye_height_offset + right_offset.y()),
    );

    (left, right)
}

///
/// A point between the lids of an eye: a blend of one upper-lid sample and one lower-lid sample
///
#[derive(Copy, Clone, PartialEq, Debug)]
struct PupilChoice {
    upper_index: usize,
    lower_index: usize,
    lerp: f64,
}

impl PupilChoice {
    fn random(eye: &EyeShape, rng: &mut impl RandomSource) -> PupilChoice {
        let max_index = (eye.upper.len().min(eye.lower.len()) as f64 - 10.0).max(10.0);

        PupilChoice {
            upper_index: rng.uniform_floor(10.0, max_index).max(0) as usize,
            lower_index: rng.uniform_floor(10.0, max_index).max(0) as usize,
            lerp: rng.uniform(0.2, 0.8),
        }
    }

    fn pupil(&self, eye: &EyeShape) -> Coord2 {
        match (eye.upper.get(self.upper_index), eye.lower.get(self.lower_index)) {
            (Some(upper), Some(lower)) => *upper * self.lerp + *lower * (1.0 - self.lerp),
            _ => Coord2(0.0, 0.0),
        }
    }
}

///
/// Picks the hair strategies for an avatar and generates their strands
///
fn generate_hair(face: &FaceContour, config: &HairConfig, rng: &mut impl RandomSource) -> Result<(Vec<HairStrategy>, Vec<HairStrand>), ShapeError> {
    let base_counts = (0..HairStrategy::ALL.len())
        .map(|_| rng.uniform(0.0, config.max_base_count).floor())
        .collect::<Vec<_>>();

    let mut strategies = vec![];
    let mut strands = vec![];

    for (index, strategy) in HairStrategy::ALL.iter().enumerate() {
        let settings = &config.strategies[index];

        if rng.chance_above(1.0 - settings.probability) {
            let num_hair_lines = settings.line_count(base_counts[index], config.extra_lines);

            strands.extend(strategy.generate(&face.ring, num_hair_lines, rng)?);
            strategies.push(*strategy);
        }
    }

    Ok((strategies, strands))
}

///
/// Places the nostrils just below the centre of the face
///
fn random_nose(width: f64, height: f64, rng: &mut impl RandomSource) -> Nose {
    let right = Coord2(rng.uniform(width / 18.0, width / 12.0), rng.uniform(0.0, height / 5.0));
    let left_x = rng.uniform(-width / 18.0, -width / 12.0);
    let left_y = right.y() + rng.uniform(-height / 30.0, height / 20.0);

    Nose {
        left: Coord2(left_x, left_y),
        right,
    }
}

///
/// Chooses a mouth variant with probability proportional to its weight
///
pub fn choose_mouth_variant(weights: &[f64; 3], rng: &mut impl RandomSource) -> MouthVariant {
    let total = weights.iter().sum::<f64>();
    let mut choice = rng.next_unit() * total;

    for (variant, weight) in MouthVariant::ALL.iter().zip(weights.iter()) {
        if choice < *weight {
            return *variant;
        }

        choice -= *weight;
    }

    MouthVariant::ALL[MouthVariant::ALL.len() - 1]
}
