//! Performance benchmarks for the deadline engine.
//!
//! Covers the pure predicates callers run in tight loops when stepping over
//! date ranges, plus a cached load through the engine.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, Month, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use deadline_engine::calendar::{holidays_in_month, is_business_day, parse_civil_date};
use deadline_engine::config::ConfigLoader;
use deadline_engine::holidays::HolidayEngine;
use deadline_engine::models::HolidayMap;

fn load_holidays() -> HolidayMap {
    let rt = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let config = ConfigLoader::load("./config/cl").expect("Failed to load config");
    let engine = config.holiday_engine();
    let holidays = rt.block_on(engine.load_holidays(false)).into_map_or_empty();
    (*holidays).clone()
}

fn bench_parse_civil_date(c: &mut Criterion) {
    c.bench_function("parse_civil_date", |b| {
        b.iter(|| parse_civil_date(black_box("2026-09-18T00:00:00Z")))
    });
}

fn bench_is_business_day(c: &mut Criterion) {
    let holidays = load_holidays();
    let date = NaiveDate::from_ymd_opt(2026, 9, 18).expect("valid date");

    let mut group = c.benchmark_group("is_business_day");
    group.bench_function("naive_date", |b| {
        b.iter(|| is_business_day(black_box(date), &holidays))
    });
    group.bench_function("string", |b| {
        b.iter(|| is_business_day(black_box("2026-09-18"), &holidays))
    });
    group.finish();
}

fn bench_scan_range(c: &mut Criterion) {
    let holidays = load_holidays();
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");

    let mut group = c.benchmark_group("scan_range");
    for days in [30i64, 365, 3650] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| {
                (0..days)
                    .filter(|offset| is_business_day(start + Duration::days(*offset), &holidays))
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_holidays_in_month(c: &mut Criterion) {
    let holidays = load_holidays();
    c.bench_function("holidays_in_month", |b| {
        b.iter(|| holidays_in_month(black_box(2026), Month::September, &holidays).len())
    });
}

fn bench_cached_load(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let config = ConfigLoader::load("./config/cl").expect("Failed to load config");
    let engine: HolidayEngine<_> = config.holiday_engine();
    rt.block_on(engine.load_holidays(false));

    c.bench_function("load_holidays_cached", |b| {
        b.to_async(&rt).iter(|| async { engine.load_holidays(false).await })
    });
}

criterion_group!(
    benches,
    bench_parse_civil_date,
    bench_is_business_day,
    bench_scan_range,
    bench_holidays_in_month,
    bench_cached_load
);
criterion_main!(benches);
