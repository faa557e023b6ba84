/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

///
/// Trait implemented by types that are made up of points in a particular coordinate space
///
pub trait Geo {
    type Point: Coordinate;
}
