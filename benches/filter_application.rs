use std::hint::black_box;

use chrono::{DateTime, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use delivery_ledger::filters::{DateRange, filter_sessions};
use delivery_ledger::models::{Record, UploadSession};
use delivery_ledger::view::page;

/// Generate sessions of 500 records spread over 2024, with a mix of date formats
fn generate_sessions(num_records: usize) -> Vec<UploadSession> {
    let records: Vec<Record> = (0..num_records)
        .map(|i| {
            let day = NaiveDate::from_yo_opt(2024, (i % 366) as u32 + 1).unwrap_or_default();
            let date = match i % 4 {
                0 => day.format("%Y-%m-%d").to_string(),
                1 => day.format("%m/%d/%Y").to_string(),
                2 => day.format("%Y-%m-%dT10:30:00").to_string(),
                _ => day.format("%Y/%m/%d").to_string(),
            };
            Record {
                date,
                client_name: format!("Client {}", i % 50),
                vendor_name: format!("Vendor {}", i % 7),
                ..Record::default()
            }
        })
        .collect();

    records
        .chunks(500)
        .enumerate()
        .map(|(i, chunk)| UploadSession {
            id: i as i64,
            upload_date: DateTime::from_timestamp_millis(i as i64).unwrap_or_default(),
            entries: chunk.to_vec(),
        })
        .collect()
}

fn range(from: (u32, u32), to: (u32, u32)) -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, from.0, from.1).unwrap(),
        NaiveDate::from_ymd_opt(2024, to.0, to.1).unwrap(),
    )
}

fn bench_filter_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_application");

    // One month: most records are rejected
    for size in [1_000, 10_000, 50_000].iter() {
        let sessions = generate_sessions(*size);
        let january = range((1, 1), (1, 31));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("one_month", size), size, |b, _| {
            b.iter(|| filter_sessions(black_box(&sessions), black_box(&january)));
        });
    }

    // Whole year: every record is cloned into the result
    for size in [1_000, 10_000, 50_000].iter() {
        let sessions = generate_sessions(*size);
        let year = range((1, 1), (12, 31));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("whole_year", size), size, |b, _| {
            b.iter(|| filter_sessions(black_box(&sessions), black_box(&year)));
        });
    }

    // Filter then take a middle page
    for size in [1_000, 10_000, 50_000].iter() {
        let sessions = generate_sessions(*size);
        let year = range((1, 1), (12, 31));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("filter_and_page", size), size, |b, _| {
            b.iter(|| {
                let outcome = filter_sessions(black_box(&sessions), black_box(&year));
                page(&outcome.records, 10, outcome.records.len() / 20).len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_application);
criterion_main!(benches);
