/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;

///
/// Samples a curve at `steps` evenly spaced positions over `t ∈ [0, 1)`
///
/// The end point itself is not included: a curve sampled at 100 steps is evaluated at t = 0.00, 0.01, ... 0.99.
///
pub fn sample_curve<Curve: BezierCurve>(curve: &Curve, steps: usize) -> Vec<Curve::Point> {
    let step_size = 1.0 / (steps as f64);

    (0..steps)
        .map(|step| curve.point_at_pos((step as f64) * step_size))
        .collect()
}

