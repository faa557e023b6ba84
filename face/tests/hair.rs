/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use doodle_face::*;

use std::f64;

fn circle_ring(radius: f64, num_points: usize) -> ContourRing {
    let points = (0..num_points)
        .map(|index| {
            let angle = (index as f64) / (num_points as f64) * f64::consts::PI * 2.0;
            Coord2(angle.cos() * radius, angle.sin() * radius)
        })
        .collect::<Vec<_>>();

    ContourRing::close(points).unwrap()
}

#[test]
fn blended_strands() {
    let ring = circle_ring(100.0, 200);
    let mut rng = RngSource::seeded(20);
    let strands = HairStrategy::Blended.generate(&ring, 40, &mut rng).unwrap();

    assert!(strands.len() == 40);
    for strand in strands.iter() {
        assert!(strand.len() >= 15 && strand.len() <= 24);
    }
}

#[test]
fn scattered_strands() {
    let ring = circle_ring(100.0, 200);
    let mut rng = RngSource::seeded(21);
    let strands = HairStrategy::Scattered.generate(&ring, 30, &mut rng).unwrap();

    assert!(strands.len() == 30);
    for strand in strands.iter() {
        assert!(strand.len() >= 16 && strand.len() <= 25);

        // Smoothing never leaves the convex hull of the circle
        for point in strand.iter() {
            assert!(point.distance_to(&Coord2(0.0, 0.0)) <= 100.0 + 1e-9);
        }
    }
}

#[test]
fn tapered_strands_join_into_locks() {
    let ring = circle_ring(100.0, 200);
    let mut rng = RngSource::seeded(22);
    let strands = HairStrategy::Tapered.generate(&ring, 50, &mut rng).unwrap();
    let total_points = strands.iter().map(|strand| strand.len()).sum::<usize>();

    assert!(!strands.is_empty());
    assert!(strands.len() <= 50);
    assert!(total_points >= 16 * 50 && total_points <= 25 * 50);
}

#[test]
fn parted_strands() {
    let ring = circle_ring(100.0, 200);
    let mut rng = RngSource::seeded(23);
    let strands = HairStrategy::Parted.generate(&ring, 60, &mut rng).unwrap();

    assert!(strands.len() == 60);
    for strand in strands.iter() {
        assert!(strand.len() >= 23 && strand.len() <= 38);
    }
}

#[test]
fn parted_strands_keep_contour_heights() {
    // Every control point keeps its contour y coordinate, so the strands stay inside the circle's vertical extent
    let ring = circle_ring(100.0, 200);
    let mut rng = RngSource::seeded(24);

    for strand in generate_parted_hair(&ring, 20, &mut rng).unwrap() {
        for point in strand {
            assert!(point.y().abs() <= 100.0 + 1e-9);
        }
    }
}

#[test]
fn strategies_work_on_generated_faces() {
    let mut rng = RngSource::seeded(25);
    let face = generate_face_contour(100, &mut rng).unwrap();

    for strategy in HairStrategy::ALL.iter() {
        let strands = strategy.generate(&face.ring, 10, &mut rng).unwrap();

        assert!(!strands.is_empty());
        assert!(strands.iter().flatten().all(|point| point.x().is_finite() && point.y().is_finite()));
    }
}

#[test]
fn no_lines_no_strands() {
    let ring = circle_ring(100.0, 200);
    let mut rng = RngSource::seeded(26);

    for strategy in HairStrategy::ALL.iter() {
        assert!(strategy.generate(&ring, 0, &mut rng).unwrap().is_empty());
    }
}

#[test]
fn distant_strands_never_merge() {
    let first = vec![Coord2(0.0, 0.0), Coord2(10.0, 0.0)];
    let second = vec![Coord2(200.0, 0.0), Coord2(210.0, 0.0)];

    let strands = fold_strand(vec![], first, true);
    let strands = fold_strand(strands, second, true);

    assert!(strands.len() == 2);
}

#[test]
fn nearby_strands_merge_when_allowed() {
    let first = vec![Coord2(0.0, 0.0), Coord2(10.0, 0.0)];
    let second = vec![Coord2(20.0, 0.0), Coord2(30.0, 0.0)];

    let joined = fold_strand(vec![first.clone()], second.clone(), true);
    assert!(joined.len() == 1);
    assert!(joined[0].len() == 4);
    assert!(joined[0][2] == Coord2(20.0, 0.0));

    let separate = fold_strand(vec![first], second, false);
    assert!(separate.len() == 2);
}

#[test]
fn first_strand_starts_a_new_lock() {
    let strands = fold_strand(vec![], vec![Coord2(0.0, 0.0)], true);

    assert!(strands.len() == 1);
}

#[test]
fn merge_distance_is_strict() {
    let end = vec![Coord2(0.0, 0.0)];

    assert!(within_merge_distance(&end, &[Coord2(99.9, 0.0)], 100.0));
    assert!(!within_merge_distance(&end, &[Coord2(100.0, 0.0)], 100.0));
    assert!(!within_merge_distance(&end, &[], 100.0));
}

#[test]
fn taper_runs_from_root_to_lower() {
    assert!(taper_portion(0, 20, 1.5, 0.8) == 1.0);
    assert!((taper_portion(10, 20, 1.0, 0.0) - 0.5).abs() < 1e-12);
    assert!((taper_portion(20, 20, 2.0, 1.4) - 1.4).abs() < 1e-12);
}

#[test]
fn offsets_are_sorted_and_in_range() {
    let mut rng = RngSource::seeded(27);
    let offsets = sorted_offsets(100, 10.0, 180.0, &mut rng);

    assert!(offsets.len() == 100);
    assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(offsets.iter().all(|offset| *offset >= 10 && *offset < 180));
}

#[test]
fn strand_lengths_are_in_range() {
    let mut rng = RngSource::seeded(28);

    for _ in 0..1000 {
        let length = random_strand_length(30, 8.0, &mut rng);
        assert!(length >= 22 && length <= 37);
    }

    assert!(random_strand_length(0, 0.0, &mut rng) == 1);
}

#[test]
fn smallest_rings() {
    let mut rng = RngSource::seeded(29);
    let ring = ContourRing::from_closed(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(0.0, 0.0), Coord2(1.0, 0.0)]).unwrap();

    assert!(ring.open_len() == 2);
    assert!(ContourRing::close(vec![Coord2(0.0, 0.0)]).is_err());
    assert!(HairStrategy::Blended.generate(&ring, 5, &mut rng).is_ok());
}

#[test]
fn ring_indices_wrap() {
    let ring = circle_ring(1.0, 8);

    assert!(ring.wrapped(-1) == ring.points()[7]);
    assert!(ring.wrapped(8) == ring.points()[0]);
    assert!(ring.wrapped(-17) == ring.points()[7]);
}
