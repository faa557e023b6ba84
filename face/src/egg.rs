/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::random::*;

use doodle_curves::*;
use serde_derive::{Deserialize, Serialize};

use std::f64;

///
/// Parameters for the egg curve `x = sqrt(((1 - y²/b²) / (1 + k·y)) · a²)`
///
/// `a` is the half-width, `b` the half-height and `k` skews the bulge along the y axis (`k = 0` is an ellipse).
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EggShape {
    pub a: f64,
    pub b: f64,
    pub k: f64,
}

///
/// The order that samples of the egg curve are emitted in
///
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EggLayout {
    /// An ascending scan over the right half followed by a descending scan over the left half: `2N` points tracing the upper half-outline
    MirroredHalves,

    /// Each sample is emitted as `(x, y), (-x, y), (-x, -y), (x, -y)`: `4N` points covering every quadrant
    Quadrants,
}

///
/// Which kinds of noise are added while sampling an egg curve
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct EggJitter {
    /// Shift each sample's angle by up to `π/1.1/N`
    pub angle: bool,

    /// Shift each sample's x coordinate by up to `a/200`
    pub position: bool,
}

impl EggJitter {
    /// Exact samples of the curve
    pub const NONE: EggJitter = EggJitter { angle: false, position: false };

    /// Angle noise only
    pub const ANGLE: EggJitter = EggJitter { angle: true, position: false };

    /// Angle and position noise
    pub const FULL: EggJitter = EggJitter { angle: true, position: true };
}

impl EggShape {
    ///
    /// Creates a new egg shape
    ///
    pub fn new(a: f64, b: f64, k: f64) -> EggShape {
        EggShape { a, b, k }
    }

    ///
    /// Checks that the curve is defined for these parameters
    ///
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !self.a.is_finite() || !self.b.is_finite() || !self.k.is_finite() || self.b == 0.0 {
            return Err(ShapeError::InvalidShapeParameters);
        }

        // 1 + k·y must stay positive for every y in [-b, b]
        if 1.0 - (self.k * self.b).abs() <= 0.0 {
            return Err(ShapeError::InvalidShapeParameters);
        }

        Ok(())
    }

    ///
    /// The (positive) x coordinate of the curve at height y, with y clamped into `[-b, b]`
    ///
    pub fn x_at(&self, y: f64) -> Result<f64, ShapeError> {
        let half_height = self.b.abs();
        let y = y.max(-half_height).min(half_height);
        let denominator = 1.0 + self.k * y;

        if denominator <= 0.0 || self.b == 0.0 {
            return Err(ShapeError::InvalidShapeParameters);
        }

        let radicand = ((1.0 - (y * y) / (self.b * self.b)) / denominator) * self.a * self.a;
        Ok(radicand.max(0.0).sqrt())
    }

    ///
    /// Samples the curve at `segment_points` angles per quarter arc
    ///
    pub fn points(
        &self,
        segment_points: usize,
        layout: EggLayout,
        jitter: EggJitter,
        rng: &mut impl RandomSource,
    ) -> Result<Vec<Coord2>, ShapeError> {
        self.validate()?;
        if segment_points == 0 {
            return Err(ShapeError::DegenerateContour);
        }

        match layout {
            EggLayout::MirroredHalves => {
                let mut result = Vec::with_capacity(segment_points * 2);

                for index in 0..segment_points {
                    result.push(self.sample(index, segment_points, 1.0, jitter, rng)?);
                }
                for index in (1..=segment_points).rev() {
                    result.push(self.sample(index, segment_points, -1.0, jitter, rng)?);
                }

                Ok(result)
            }

            EggLayout::Quadrants => {
                let mut result = Vec::with_capacity(segment_points * 4);

                for index in 0..segment_points {
                    let Coord2(x, y) = self.sample(index, segment_points, 1.0, jitter, rng)?;
                    result.extend([Coord2(x, y), Coord2(-x, y), Coord2(-x, -y), Coord2(x, -y)]);
                }

                Ok(result)
            }
        }
    }

    ///
    /// Generates the sample at a particular index, with the x coordinate multiplied by `side`
    ///
    fn sample(
        &self,
        index: usize,
        segment_points: usize,
        side: f64,
        jitter: EggJitter,
        rng: &mut impl RandomSource,
    ) -> Result<Coord2, ShapeError> {
        let segments = segment_points as f64;
        let mut degree = (f64::consts::PI / 2.0 / segments) * (index as f64);

        if jitter.angle {
            let spread = f64::consts::PI / 1.1 / segments;
            degree += rng.uniform(-spread, spread);
        }

        let y = degree.sin() * self.b;
        let mut x = side * self.x_at(y)?;

        if jitter.position {
            x += rng.uniform(-self.a / 200.0, self.a / 200.0);
        }

        Ok(Coord2(x, y))
    }
}
