use assertlib::{assert_almost_equal, assert_either, assert_equal, assert_sequence_equal};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn assertions_bench(c: &mut Criterion) {
    let left: Vec<u64> = (0..4_096).collect();
    let right = left.clone();
    let mut skewed = left.clone();
    if let Some(last) = skewed.last_mut() {
        *last += 1;
    }

    c.bench_function("sequence_equal_pass", |b| {
        b.iter(|| black_box(assert_sequence_equal(&left, &right, true)));
    });

    c.bench_function("sequence_equal_fail", |b| {
        b.iter(|| black_box(assert_sequence_equal(&left, &skewed, false)));
    });

    c.bench_function("almost_equal_places", |b| {
        b.iter(|| {
            for value in &left {
                let value = *value as f64;
                let _ = black_box(assert_almost_equal(value, value + 0.001, Some(2), None));
            }
        });
    });

    c.bench_function("either_membership", |b| {
        b.iter(|| black_box(assert_either(&4_095u64, &0u64, &right)));
    });

    c.bench_function("equal_fail_render", |b| {
        b.iter(|| black_box(assert_equal(&left, &skewed)));
    });
}

criterion_group!(benches, assertions_bench);
criterion_main!(benches);
