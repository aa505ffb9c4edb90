// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Criterion};
use spot_math::{radians, slerp, Mat4, Quaternion, Vec3};
use std::hint::black_box;

fn bench_matrix(c: &mut Criterion) {
    let a = Mat4::IDENTITY
        .rotated_y(radians(30.0))
        .translated(Vec3::new(1.0, 2.0, 3.0));
    let b = Mat4::from_quat(Quaternion::from_axis_angle(
        Vec3::new(1.0, 1.0, 0.0).normalized(),
        radians(45.0),
    ));
    let points: Vec<Vec3> = (0..1_000)
        .map(|i| Vec3::new(i as f32, (i * 2) as f32, (i % 7) as f32))
        .collect();

    let mut group = c.benchmark_group("Mat4");

    group.bench_function("Mat4 * Mat4", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });

    group.bench_function("Mat4 * Vec3 (1000 points)", |bench| {
        bench.iter(|| {
            let m = black_box(a);
            for p in &points {
                black_box(m * *p);
            }
        });
    });

    group.bench_function("rotate_x + translate chain", |bench| {
        bench.iter(|| {
            let mut m = Mat4::IDENTITY;
            m.rotate_x(black_box(0.3))
                .rotate_z(black_box(0.2))
                .translate(black_box(Vec3::ONE));
            m
        });
    });

    group.finish();
}

fn bench_quaternion(c: &mut Criterion) {
    let q1 = Quaternion::from_axis_angle(Vec3::Y, radians(20.0));
    let q2 = Quaternion::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), radians(130.0));
    let nearly_q1 = Quaternion::from_axis_angle(Vec3::Y, radians(21.0));

    let mut group = c.benchmark_group("Quaternion");

    group.bench_function("compose", |bench| {
        bench.iter(|| black_box(q1) * black_box(q2));
    });

    group.bench_function("slerp (trigonometric)", |bench| {
        bench.iter(|| slerp(black_box(q1), black_box(q2), black_box(0.37)));
    });

    group.bench_function("slerp (nearly parallel)", |bench| {
        bench.iter(|| slerp(black_box(q1), black_box(nearly_q1), black_box(0.37)));
    });

    group.bench_function("from_mat4", |bench| {
        let m = Mat4::from_quat(q2);
        bench.iter(|| Quaternion::from_mat4(black_box(&m)));
    });

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_quaternion);
criterion_main!(benches);
