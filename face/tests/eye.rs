/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use doodle_face::*;

#[test]
fn outline_has_both_lids() {
    let mut rng = RngSource::seeded(3);
    let eyes = generate_both_eyes(50.0, &mut rng);

    assert!(eyes.left.upper.len() == 100);
    assert!(eyes.left.lower.len() == 100);
    assert!(eyes.left.outline().len() == 200);
    assert!(eyes.right.outline().len() == 200);
}

#[test]
fn lids_share_the_left_corner() {
    let mut rng = RngSource::seeded(4);
    let eyes = generate_both_eyes(60.0, &mut rng);

    assert!(eyes.left.upper[0] == eyes.left.lower[0]);
    assert!(eyes.right.upper[0] == eyes.right.lower[0]);
}

#[test]
fn right_eye_is_within_half_of_left() {
    let mut rng = RngSource::seeded(5);

    for _ in 0..100 {
        let eyes = generate_both_eyes(rng.uniform(20.0, 80.0), &mut rng);

        for (left, right) in eyes.left_parameters.values().iter().zip(eyes.right_parameters.values().iter()) {
            assert!((right - left).abs() <= left.abs() / 2.0 + 1e-12);
        }
    }
}

#[test]
fn central_draws_give_matching_eyes() {
    let mut rng = SequenceSource::constant(0.5);
    let eyes = generate_both_eyes(40.0, &mut rng);

    assert!(eyes.left_parameters == eyes.right_parameters);
    assert!(eyes.left == eyes.right);
}

#[test]
fn true_width_is_distance_between_corners() {
    let mut rng = RngSource::seeded(6);
    let parameters = EyeParameters::random(48.0, &mut rng);
    let (upper, _lower) = parameters.eyelid_curves(48.0);

    assert!(((upper.end_point.x() - upper.start_point.x()) - parameters.eye_true_width).abs() < 1e-9);
}

#[test]
fn values_round_trip() {
    let mut rng = RngSource::seeded(7);
    let parameters = EyeParameters::random(30.0, &mut rng);

    assert!(EyeParameters::from_values(parameters.values()) == parameters);
}

#[test]
fn clip_contour_is_between_the_lids() {
    let mut rng = RngSource::seeded(9);
    let eyes = generate_both_eyes(50.0, &mut rng);
    let clip = eyes.left.clip_contour();

    assert!(clip.len() == 160);
    assert!(clip[0] == eyes.left.upper[10]);
    assert!(clip[79] == eyes.left.upper[89]);
    assert!(clip[80] == eyes.left.lower[89]);
    assert!(clip[159] == eyes.left.lower[10]);
}
