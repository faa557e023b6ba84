/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::random::*;

use doodle_curves::bezier::*;
use serde_derive::{Deserialize, Serialize};

///
/// The random values that describe the shape of one eye
///
/// The corners are shared by both lids: they sit at `x = ∓width/2`, moved by up to `width/80` horizontally and by
/// up to `height_upper/80` vertically. Each lid then has its own pair of control-point offsets from those corners.
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EyeParameters {
    pub height_upper: f64,
    pub height_lower: f64,

    pub p0_upper_rand_x: f64,
    pub p3_upper_rand_x: f64,
    pub p0_upper_rand_y: f64,
    pub p3_upper_rand_y: f64,

    pub offset_upper_left_rand_y: f64,
    pub offset_upper_right_rand_y: f64,

    /// Distance between the two corners
    pub eye_true_width: f64,

    pub offset_upper_left_x: f64,
    pub offset_upper_right_x: f64,
    pub offset_upper_left_y: f64,
    pub offset_upper_right_y: f64,

    pub offset_lower_left_x: f64,
    pub offset_lower_right_x: f64,
    pub offset_lower_left_y: f64,
    pub offset_lower_right_y: f64,
}

///
/// The two eyelids of one eye, each sampled at `EYELID_STEPS` points
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct EyeShape {
    pub upper: Vec<Coord2>,
    pub lower: Vec<Coord2>,
}

///
/// A left and right eye, along with the parameters each was built from
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct EyePair {
    pub left: EyeShape,
    pub right: EyeShape,
    pub left_parameters: EyeParameters,
    pub right_parameters: EyeParameters,
}

impl EyeParameters {
    ///
    /// Draws the parameters for an eye of the specified width
    ///
    pub fn random(width: f64, rng: &mut impl RandomSource) -> EyeParameters {
        let height_upper = rng.uniform(0.0, width / 1.2);
        let height_lower = rng.uniform(0.0, width / 1.2);
        let p0_upper_rand_x = rng.uniform(-0.2, 0.2);
        let p3_upper_rand_x = rng.uniform(-0.2, 0.2);
        let p0_upper_rand_y = rng.uniform(-0.2, 0.2);
        let p3_upper_rand_y = rng.uniform(-0.2, 0.2);
        let offset_upper_left_rand_y = rng.next_unit();
        let offset_upper_right_rand_y = rng.next_unit();

        let eye_true_width = (width / 2.0 + p3_upper_rand_x * width / 16.0) - (-width / 2.0 + p0_upper_rand_x * width / 16.0);

        let offset_upper_left_x = rng.uniform(eye_true_width / 10.0, eye_true_width / 2.3);
        let offset_upper_right_x = rng.uniform(eye_true_width / 10.0, eye_true_width / 2.3);
        let offset_upper_left_y = offset_upper_left_rand_y * height_upper;
        let offset_upper_right_y = offset_upper_right_rand_y * height_upper;

        let offset_lower_left_x = rng.uniform(offset_upper_left_x, eye_true_width / 2.1);
        let offset_lower_right_x = rng.uniform(offset_upper_right_x, eye_true_width / 2.1);
        let offset_lower_left_y = rng.uniform(-offset_upper_left_y + 5.0, height_lower);
        let offset_lower_right_y = rng.uniform(-offset_upper_right_y + 5.0, height_lower);

        EyeParameters {
            height_upper,
            height_lower,
            p0_upper_rand_x,
            p3_upper_rand_x,
            p0_upper_rand_y,
            p3_upper_rand_y,
            offset_upper_left_rand_y,
            offset_upper_right_rand_y,
            eye_true_width,
            offset_upper_left_x,
            offset_upper_right_x,
            offset_upper_left_y,
            offset_upper_right_y,
            offset_lower_left_x,
            offset_lower_right_x,
            offset_lower_left_y,
            offset_lower_right_y,
        }
    }

    ///
    /// Every parameter, in declaration order
    ///
    pub fn values(&self) -> [f64; 17] {
        [
            self.height_upper,
            self.height_lower,
            self.p0_upper_rand_x,
            self.p3_upper_rand_x,
            self.p0_upper_rand_y,
            self.p3_upper_rand_y,
            self.offset_upper_left_rand_y,
            self.offset_upper_right_rand_y,
            self.eye_true_width,
            self.offset_upper_left_x,
            self.offset_upper_right_x,
            self.offset_upper_left_y,
            self.offset_upper_right_y,
            self.offset_lower_left_x,
            self.offset_lower_right_x,
            self.offset_lower_left_y,
            self.offset_lower_right_y,
        ]
    }

    ///
    /// Creates parameters from a list of values in the same order as `values()`
    ///
    pub fn from_values(values: [f64; 17]) -> EyeParameters {
        let [
            height_upper,
            height_lower,
            p0_upper_rand_x,
            p3_upper_rand_x,
            p0_upper_rand_y,
            p3_upper_rand_y,
            offset_upper_left_rand_y,
            offset_upper_right_rand_y,
            eye_true_width,
            offset_upper_left_x,
            offset_upper_right_x,
            offset_upper_left_y,
            offset_upper_right_y,
            offset_lower_left_x,
            offset_lower_right_x,
            offset_lower_left_y,
            offset_lower_right_y,
        ] = values;

        EyeParameters {
            height_upper,
            height_lower,
            p0_upper_rand_x,
            p3_upper_rand_x,
            p0_upper_rand_y,
            p3_upper_rand_y,
            offset_upper_left_rand_y,
            offset_upper_right_rand_y,
            eye_true_width,
            offset_upper_left_x,
            offset_upper_right_x,
            offset_upper_left_y,
            offset_upper_right_y,
            offset_lower_left_x,
            offset_lower_right_x,
            offset_lower_left_y,
            offset_lower_right_y,
        }
    }

    ///
    /// Derives a related set of parameters by moving each value independently by up to half its own magnitude
    ///
    pub fn perturbed(&self, rng: &mut impl RandomSource) -> EyeParameters {
        let mut values = self.values();

        for value in values.iter_mut() {
            *value += rng.uniform(-*value / 2.0, *value / 2.0);
        }

        EyeParameters::from_values(values)
    }

    ///
    /// The upper and lower eyelid curves for an eye of the specified width
    ///
    pub fn eyelid_curves(&self, width: f64) -> (Curve<Coord2>, Curve<Coord2>) {
        let corner_left = Coord2(
            -width / 2.0 + self.p0_upper_rand_x * width / 16.0,
            self.p0_upper_rand_y * self.height_upper / 16.0,
        );
        let corner_right = Coord2(
            width / 2.0 + self.p3_upper_rand_x * width / 16.0,
            self.p3_upper_rand_y * self.height_upper / 16.0,
        );

        let upper_cp1 = corner_left + Coord2(self.offset_upper_left_x, self.offset_upper_left_y);
        let upper_cp2 = corner_right + Coord2(-self.offset_upper_right_x, self.offset_upper_right_y);

        let lower_cp1 = corner_left + Coord2(self.offset_lower_left_x, -self.offset_lower_left_y);
        let lower_cp2 = corner_right + Coord2(-self.offset_lower_right_x, -self.offset_lower_right_y);

        (
            Curve::from_points(corner_left, (upper_cp1, upper_cp2), corner_right),
            Curve::from_points(corner_left, (lower_cp1, lower_cp2), corner_right),
        )
    }
}

impl EyeShape {
    ///
    /// Samples both eyelids for an eye with the specified parameters
    ///
    pub fn from_parameters(parameters: &EyeParameters, width: f64) -> EyeShape {
        let (upper, lower) = parameters.eyelid_curves(width);

        EyeShape {
            upper: sample_curve(&upper, EYELID_STEPS),
            lower: sample_curve(&lower, EYELID_STEPS),
        }
    }

    ///
    /// The upper lid followed by the lower lid
    ///
    pub fn outline(&self) -> Vec<Coord2> {
        self.upper.iter().chain(self.lower.iter()).copied().collect()
    }

    ///
    /// The area between the lids: the middle of the upper lid followed by the middle of the lower lid in reverse
    ///
    pub fn clip_contour(&self) -> Vec<Coord2> {
        let upper_end = EYE_CLIP_END.min(self.upper.len());
        let lower_end = EYE_CLIP_END.min(self.lower.len());

        let upper = self.upper.get(EYE_CLIP_START..upper_end).unwrap_or(&[]);
        let lower = self.lower.get(EYE_CLIP_START..lower_end).unwrap_or(&[]);

        upper.iter().chain(lower.iter().rev()).copied().collect()
    }
}

///
/// Generates a left eye with random parameters and a right eye whose parameters are perturbed from the left's
///
pub fn generate_both_eyes(width: f64, rng: &mut impl RandomSource) -> EyePair {
    let left_parameters = EyeParameters::random(width, rng);
    let right_parameters = left_parameters.perturbed(rng);

    EyePair {
        left: EyeShape::from_parameters(&left_parameters, width),
        right: EyeShape::from_parameters(&right_parameters, width),
        left_parameters,
        right_parameters,
    }
}
