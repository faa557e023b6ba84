/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # doodle_face
//!
//! Generates the geometry of a doodled avatar: an egg-shaped face contour, a pair of eyes, a mouth and hair
//! strands. Everything is returned as lists of points, ready to be written out as polylines.
//!
//! ```
//! # use doodle_face::*;
//! #
//! let mut rng     = RngSource::seeded(1234);
//!
//! let face        = generate_face_contour(100, &mut rng).unwrap();
//! let eyes        = generate_both_eyes(face.width / 2.0, &mut rng);
//! let mouth       = MouthVariant::Smile.generate(face.height, face.width, &mut rng).unwrap();
//! let hair        = HairStrategy::Tapered.generate(&face.ring, 30, &mut rng).unwrap();
//!
//! let outline     = to_points_attribute(face.ring.points());
//! ```
//!
//! Features are generated in one direction only: the face contour comes first, and its width, height and ring
//! are then used to size the eyes and mouth and to seed the hair. `Avatar::generate()` composes all of the
//! features using the settings in an `AvatarConfig`.
//!
//! Every generator takes its random numbers from a `RandomSource` passed in by the caller. `RngSource` wraps a
//! `rand` generator, and `SequenceSource` replays a fixed list of values, which is useful for testing.
//!

mod avatar;
mod config;
mod egg;
mod error;
mod eye;
mod face;
mod polyline;
mod random;
mod ring;

pub mod consts;
pub mod hair;
pub mod mouth;

pub use self::avatar::*;
pub use self::config::*;
pub use self::egg::*;
pub use self::error::*;
pub use self::eye::*;
pub use self::face::*;
pub use self::hair::*;
pub use self::mouth::*;
pub use self::polyline::*;
pub use self::random::*;
pub use self::ring::*;

pub use doodle_curves::{Coord2, Coordinate, Point2D};
