/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use doodle_face::*;

use std::f64;

#[test]
fn jitter_free_ellipse() {
    let mut rng = SequenceSource::constant(0.5);
    let egg = EggShape::new(80.0, 90.0, 0.0);
    let points = egg.points(100, EggLayout::MirroredHalves, EggJitter::NONE, &mut rng).unwrap();

    assert!(points.len() == 200);
    assert!(points[0].is_near_to(&Coord2(80.0, 0.0), 1e-9));

    // Top of the curve is half way through the output
    assert!(points[100].is_near_to(&Coord2(0.0, 90.0), 1e-9));

    // A quarter of the way through is the 45° sample
    let angle = f64::consts::PI / 4.0;
    assert!(points[50].is_near_to(&Coord2(80.0 * angle.cos(), 90.0 * angle.sin()), 1e-9));

    // Second half mirrors the first
    assert!(points[199].is_near_to(&Coord2(-points[1].x(), points[1].y()), 1e-9));

    // No random draws without jitter
    assert!(rng.draws() == 0);
}

#[test]
fn every_point_lies_on_the_ellipse() {
    let mut rng = SequenceSource::constant(0.5);
    let egg = EggShape::new(60.0, 40.0, 0.0);

    for point in egg.points(50, EggLayout::MirroredHalves, EggJitter::NONE, &mut rng).unwrap() {
        let value = (point.x() / 60.0).powi(2) + (point.y() / 40.0).powi(2);
        assert!((value - 1.0).abs() < 1e-9);
    }
}

#[test]
fn sample_counts_match_layout() {
    let mut rng = RngSource::seeded(3);
    let egg = EggShape::new(80.0, 90.0, 0.003);

    for segment_points in [1, 7, 50, 100] {
        let halves = egg.points(segment_points, EggLayout::MirroredHalves, EggJitter::FULL, &mut rng).unwrap();
        let quadrants = egg.points(segment_points, EggLayout::Quadrants, EggJitter::ANGLE, &mut rng).unwrap();

        assert!(halves.len() == 2 * segment_points);
        assert!(quadrants.len() == 4 * segment_points);
    }
}

#[test]
fn jittered_points_stay_within_height() {
    let mut rng = RngSource::seeded(17);

    for _ in 0..50 {
        let a = rng.uniform(10.0, 100.0);
        let b = rng.uniform(10.0, 100.0);
        let k = rng.uniform(-0.005, 0.005);
        let egg = EggShape::new(a, b, k);

        for layout in [EggLayout::MirroredHalves, EggLayout::Quadrants] {
            for point in egg.points(40, layout, EggJitter::FULL, &mut rng).unwrap() {
                assert!(point.y() >= -b && point.y() <= b);
                assert!(point.x().is_finite());
            }
        }
    }
}

#[test]
fn quadrants_are_symmetric() {
    let mut rng = RngSource::seeded(5);
    let points = EggShape::new(30.0, 10.0, 0.001)
        .points(20, EggLayout::Quadrants, EggJitter::ANGLE, &mut rng)
        .unwrap();

    for quad in points.chunks(4) {
        assert!(quad[1] == Coord2(-quad[0].x(), quad[0].y()));
        assert!(quad[2] == Coord2(-quad[0].x(), -quad[0].y()));
        assert!(quad[3] == Coord2(quad[0].x(), -quad[0].y()));
    }
}

#[test]
fn skew_widens_one_side() {
    let egg = EggShape::new(50.0, 50.0, 0.005);

    assert!(egg.x_at(-25.0).unwrap() > egg.x_at(25.0).unwrap());
    assert!(EggShape::new(50.0, 50.0, 0.0).x_at(-25.0).unwrap() == EggShape::new(50.0, 50.0, 0.0).x_at(25.0).unwrap());
}

#[test]
fn height_is_clamped() {
    let egg = EggShape::new(50.0, 50.0, 0.0);

    assert!(egg.x_at(75.0).unwrap() == 0.0);
    assert!(egg.x_at(-75.0).unwrap() == 0.0);
}

#[test]
fn zero_height_is_rejected() {
    let mut rng = SequenceSource::constant(0.5);
    let egg = EggShape::new(50.0, 0.0, 0.0);

    assert!(egg.validate() == Err(ShapeError::InvalidShapeParameters));
    assert!(egg.points(10, EggLayout::MirroredHalves, EggJitter::NONE, &mut rng) == Err(ShapeError::InvalidShapeParameters));
}

#[test]
fn vanishing_denominator_is_rejected() {
    let mut rng = SequenceSource::constant(0.5);
    let egg = EggShape::new(50.0, 100.0, 0.02);

    assert!(egg.validate() == Err(ShapeError::InvalidShapeParameters));
    assert!(egg.points(10, EggLayout::Quadrants, EggJitter::NONE, &mut rng).is_err());
    assert!(egg.x_at(-50.0) == Err(ShapeError::InvalidShapeParameters));
}

#[test]
fn non_finite_parameters_are_rejected() {
    assert!(EggShape::new(f64::NAN, 10.0, 0.0).validate().is_err());
    assert!(EggShape::new(10.0, f64::INFINITY, 0.0).validate().is_err());
}

#[test]
fn zero_segments_is_degenerate() {
    let mut rng = SequenceSource::constant(0.5);

    assert!(EggShape::new(10.0, 10.0, 0.0).points(0, EggLayout::MirroredHalves, EggJitter::NONE, &mut rng) == Err(ShapeError::DegenerateContour));
}
