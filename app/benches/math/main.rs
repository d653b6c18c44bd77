/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sinpi::{copysign, sinpi};
use std::f64::consts::PI;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::sin(PI * x)", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sin(PI * (i as f64 / 7.0 - 70.0)));
            }
        })
    });

    c.bench_function("system: sin(PI * x)", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f64::sin(PI * (i as f64 / 7.0 - 70.0)));
            }
        })
    });

    c.bench_function("sinpi", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinpi(i as f64 / 7.0 - 70.0).unwrap_or(f64::NAN));
            }
        })
    });

    c.bench_function("system: copysign", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f64::copysign(i as f64, 500. - i as f64));
            }
        })
    });

    c.bench_function("sinpi: copysign", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(copysign(i as f64, 500. - i as f64));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
