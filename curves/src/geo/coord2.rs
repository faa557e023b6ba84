/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

use serde_derive::{Deserialize, Serialize};

use std::ops::*;

///
/// Represents a 2D point
///
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

///
/// A point in 2D space, as produced by every generator in this workspace
///
pub type Point2D = Coord2;

impl Coord2 {
    /// X component of this coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    /// Y component of this coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Rotates this point counter-clockwise about the origin by an angle in radians
    ///
    #[inline]
    pub fn rotate(&self, angle: f64) -> Coord2 {
        let (sin, cos) = angle.sin_cos();

        Coord2(self.0 * cos - self.1 * sin, self.0 * sin + self.1 * cos)
    }

    ///
    /// Reflects this point in the x axis
    ///
    #[inline]
    pub fn flip_y(&self) -> Coord2 {
        Coord2(self.0, -self.1)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<Coord2> for (f64, f64) {
    #[inline]
    fn from(Coord2(x, y): Coord2) -> (f64, f64) {
        (x, y)
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign<Coord2> for Coord2 {
    #[inline]
    fn add_assign(&mut self, rhs: Coord2) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl SubAssign<Coord2> for Coord2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Coord2) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn from_components(components: &[f64]) -> Coord2 {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize {
        2
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("Coord2 only has two components"),
        }
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0 - self.0;
        let dist_y = target.1 - self.1;

        f64::sqrt(dist_x * dist_x + dist_y * dist_y)
    }

    #[inline]
    fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }
}
