/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use doodle_curves::*;

use std::f64;

#[test]
fn rotate_quarter_turn() {
    let rotated = Coord2(1.0, 0.0).rotate(f64::consts::PI / 2.0);

    assert!(rotated.is_near_to(&Coord2(0.0, 1.0), 1e-12));
}

#[test]
fn distance_between_points() {
    assert!((Coord2(0.0, 0.0).distance_to(&Coord2(3.0, 4.0)) - 5.0).abs() < 1e-12);
}

#[test]
fn centroid_of_square() {
    let square = vec![Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 2.0), Coord2(0.0, 2.0)];

    assert!(centroid(&square) == Coord2(1.0, 1.0));
}

#[test]
fn centroid_of_nothing_is_origin() {
    assert!(centroid::<Coord2>(&[]) == Coord2(0.0, 0.0));
}

#[test]
fn recentered_points_have_zero_centroid() {
    let points = vec![Coord2(10.0, 3.0), Coord2(14.0, 9.0), Coord2(-2.0, 1.5)];
    let (recentered, center) = recenter_points(&points);

    assert!(center.is_near_to(&Coord2(22.0 / 3.0, 4.5), 1e-12));
    assert!(centroid(&recentered).is_near_to(&Coord2(0.0, 0.0), 1e-12));
}

#[test]
fn translate_scale_rotate() {
    let points = vec![Coord2(1.0, 0.0), Coord2(0.0, 1.0)];

    assert!(translate_points(&points, Coord2(1.0, 1.0)) == vec![Coord2(2.0, 1.0), Coord2(1.0, 2.0)]);
    assert!(scale_points(&points, 2.0) == vec![Coord2(2.0, 0.0), Coord2(0.0, 2.0)]);

    let rotated = rotate_points(&points, f64::consts::PI);
    assert!(rotated[0].is_near_to(&Coord2(-1.0, 0.0), 1e-12));
    assert!(rotated[1].is_near_to(&Coord2(0.0, -1.0), 1e-12));
}

#[test]
fn flip_and_negate() {
    assert!(Coord2(2.0, 3.0).flip_y() == Coord2(2.0, -3.0));
    assert!(-Coord2(2.0, 3.0) == Coord2(-2.0, -3.0));
}
