/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Hair strands
//!
//! Every strategy reads points from the face contour (without its closing pair), treating it as a ring so that
//! index windows can run off either end. The sampled points become a Bezier control polygon that is smoothed
//! into the final strand.
//!
//! * `Blended` mixes two smoothed windows that run in opposite directions from two random offsets
//! * `Scattered` builds a sparse control polygon from unrelated points, which gives spiky strands
//! * `Tapered` walks the ring from sorted offsets, scaling points by a power-law taper, and joins neighbouring strands into locks
//! * `Parted` is like `Tapered` but splits the offsets either side of a parting, curls twice as fast and only tapers horizontally
//!

mod blended;
mod parted;
mod sampling;
mod scattered;
mod tapered;

pub use self::blended::*;
pub use self::parted::*;
pub use self::sampling::*;
pub use self::scattered::*;
pub use self::tapered::*;

use crate::error::*;
use crate::random::*;
use crate::ring::*;

use doodle_curves::*;
use log::debug;
use serde_derive::{Deserialize, Serialize};

///
/// A single hair line
///
pub type HairStrand = Vec<Coord2>;

///
/// The ways that hair strands can be generated from a face contour
///
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum HairStrategy {
    Blended,
    Scattered,
    Tapered,
    Parted,
}

impl HairStrategy {
    /// Every strategy, in the order their settings are configured
    pub const ALL: [HairStrategy; 4] = [HairStrategy::Blended, HairStrategy::Scattered, HairStrategy::Tapered, HairStrategy::Parted];

    ///
    /// Generates `num_hair_lines` strands (fewer for `Tapered`, which can join strands together) around a face contour
    ///
    pub fn generate(&self, face_contour: &ContourRing, num_hair_lines: usize, rng: &mut impl RandomSource) -> Result<Vec<HairStrand>, ShapeError> {
        let strands = match self {
            HairStrategy::Blended => generate_blended_hair(face_contour, num_hair_lines, rng),
            HairStrategy::Scattered => generate_scattered_hair(face_contour, num_hair_lines, rng),
            HairStrategy::Tapered => generate_tapered_hair(face_contour, num_hair_lines, rng),
            HairStrategy::Parted => generate_parted_hair(face_contour, num_hair_lines, rng),
        }?;

        debug!("{:?} hair: {} strands from {} lines", self, strands.len(), num_hair_lines);

        Ok(strands)
    }
}
