// In simpledata-core/benches/dispatch_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simpledata::{ensure_simple_data, is_numeric, slice_of, SimpleData};

fn sample_values() -> Vec<Box<dyn SimpleData>> {
    vec![
        Box::new(1i64),
        Box::new(2.5f64),
        Box::new(String::from("abc")),
        Box::new(true),
        Box::new(7u8),
        Box::new('x'),
    ]
}

fn bench_dispatch(c: &mut Criterion) {
    let values = sample_values();
    // Touch the registry so its one-time build is not measured.
    black_box(is_numeric(&0i32));

    c.bench_function("is_numeric/mixed", |b| {
        b.iter(|| {
            values
                .iter()
                .filter(|v| is_numeric(black_box(&***v)))
                .count()
        })
    });

    c.bench_function("ensure_simple_data/valid", |b| {
        b.iter(|| {
            for v in values.iter().take(5) {
                ensure_simple_data(black_box(&**v));
            }
        })
    });

    c.bench_function("is_numeric/boxed", |b| {
        b.iter(|| values.iter().filter(|v| is_numeric(black_box(*v))).count())
    });

    c.bench_function("slice_of/int64", |b| {
        b.iter(|| slice_of(black_box("int64")))
    });

    c.bench_function("slice_of/invalid", |b| {
        b.iter(|| slice_of(black_box("date")).is_err())
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
