/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Largest polygon degree that has its binomial coefficients precomputed
pub const BINOMIAL_TABLE_DEGREE: usize = 64;
