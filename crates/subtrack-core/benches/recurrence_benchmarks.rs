use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subtrack_core::describe::describe_detailed;
use subtrack_core::recurrence::RecurrenceManager;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn bench_manager_creation(c: &mut Criterion) {
    c.bench_function("recurrence_manager_creation", |b| {
        b.iter(|| {
            RecurrenceManager::new(black_box("FREQ=DAILY;INTERVAL=1"), black_box(anchor()))
                .unwrap()
        })
    });
}

fn bench_occurrence_generation(c: &mut Criterion) {
    let start = anchor();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    let daily = RecurrenceManager::new("FREQ=DAILY;INTERVAL=1", start).unwrap();
    c.bench_function("daily_occurrences_one_year", |b| {
        b.iter(|| daily.generate_occurrences_between(black_box(start), black_box(end)))
    });

    let last_friday =
        RecurrenceManager::new("FREQ=MONTHLY;INTERVAL=1;BYDAY=FR;BYSETPOS=-1", start).unwrap();
    c.bench_function("last_friday_occurrences_one_year", |b| {
        b.iter(|| last_friday.generate_occurrences_between(black_box(start), black_box(end)))
    });

    let biweekly = RecurrenceManager::new("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO", start).unwrap();
    c.bench_function("biweekly_next_occurrence", |b| {
        b.iter(|| biweekly.next_occurrence_from(black_box(end)))
    });
}

fn bench_description(c: &mut Criterion) {
    c.bench_function("describe_detailed", |b| {
        b.iter(|| describe_detailed(black_box("FREQ=YEARLY;INTERVAL=1;BYMONTH=3;BYMONTHDAY=15")))
    });
}

criterion_group!(
    benches,
    bench_manager_creation,
    bench_occurrence_generation,
    bench_description
);
criterion_main!(benches);
