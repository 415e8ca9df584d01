use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use logsweep::{age_from_stamp, classify, is_expired};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("dated", |b| {
        b.iter(|| classify(black_box("app-20240131.log"), Some("app-20260806.log")));
    });

    group.bench_function("rotated", |b| {
        b.iter(|| classify(black_box("renderer.old.log"), None));
    });

    group.bench_function("unrecognized", |b| {
        b.iter(|| classify(black_box("notes.txt"), None));
    });

    group.finish();
}

fn bench_age_policy(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let mut group = c.benchmark_group("age_policy");

    group.bench_function("from_stamp", |b| {
        b.iter(|| age_from_stamp(black_box("20240131"), today));
    });

    group.bench_function("is_expired", |b| {
        b.iter(|| is_expired(black_box(31), black_box(30)));
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_age_policy);
criterion_main!(benches);
