/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doodle_curves::bezier::*;

fn strand_polygon(length: usize) -> Vec<Coord2> {
    (0..length)
        .map(|index| {
            let angle = (index as f64) / (length as f64) * 3.0;
            Coord2(angle.cos() * 80.0, angle.sin() * 90.0)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let short = strand_polygon(20);
    let long = strand_polygon(40);
    let curve = Curve::from_points(short[0], (short[5], short[10]), short[19]);

    c.bench_function("smooth_polygon 20", |b| b.iter(|| smooth_polygon(black_box(&short), 20)));
    c.bench_function("smooth_polygon 40", |b| b.iter(|| smooth_polygon(black_box(&long), 40)));
    c.bench_function("sample_curve 100", |b| b.iter(|| sample_curve(black_box(&curve), 100)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
