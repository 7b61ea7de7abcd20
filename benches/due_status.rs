//! Benchmarks for due-status label rendering.
//!
//! These benchmarks measure date parsing and formatting for the task table's
//! "Due" column.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn label(due_on: &str, today: NaiveDate) -> String {
    let date = match NaiveDate::parse_from_str(due_on, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return due_on.to_string(),
    };
    if date < today {
        let years = (today.signed_duration_since(date).num_days() / 365).max(1);
        format!("expired ({}y past due)", years)
    } else {
        date.format("%-d %b %Y").to_string()
    }
}

fn bench_parse_date(c: &mut Criterion) {
    c.bench_function("parse_iso_date", |b| {
        b.iter(|| NaiveDate::parse_from_str(black_box("2016-06-30"), "%Y-%m-%d"))
    });
}

fn bench_label_expired(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2019, 7, 1).unwrap();
    c.bench_function("label_expired", |b| {
        b.iter(|| label(black_box("2016-06-30"), today))
    });
}

fn bench_label_upcoming(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    c.bench_function("label_upcoming", |b| {
        b.iter(|| label(black_box("2016-06-30"), today))
    });
}

criterion_group!(
    benches,
    bench_parse_date,
    bench_label_expired,
    bench_label_upcoming
);
criterion_main!(benches);
