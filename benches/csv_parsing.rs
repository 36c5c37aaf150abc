use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use delivery_ledger::models::FIELD_NAMES;
use delivery_ledger::{parse_csv, parse_json, to_csv};

/// Generate CSV text with one malformed line in every hundred
fn generate_csv(num_lines: usize) -> String {
    let mut lines = vec![FIELD_NAMES.join(",")];
    for i in 0..num_lines {
        if i % 100 == 99 {
            lines.push(format!("2024-01-{:02},broken", i % 28 + 1));
        } else {
            lines.push(format!(
                "2024-01-{:02},Client {},input {},Translate,Vendor {},2024-02-01,2024-01-20,2024-01-30,note {}",
                i % 28 + 1,
                i % 50,
                i,
                i % 7,
                i
            ));
        }
    }
    lines.join("\n")
}

fn bench_csv_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_parsing");

    for size in [1_000, 10_000, 50_000].iter() {
        let text = generate_csv(*size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_csv", size), size, |b, _| {
            b.iter(|| parse_csv(black_box(&text)).unwrap());
        });
    }

    // Same records through the JSON path
    for size in [1_000, 10_000].iter() {
        let records = parse_csv(&generate_csv(*size)).unwrap().records;
        let json = serde_json::to_string(&records).unwrap();

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_json", size), size, |b, _| {
            b.iter(|| parse_json(black_box(&json)).unwrap());
        });
    }

    // Export serialization with quoting
    for size in [1_000, 10_000].iter() {
        let records = parse_csv(&generate_csv(*size)).unwrap().records;

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("to_csv", size), size, |b, _| {
            b.iter(|| to_csv(black_box(&records)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_csv_parsing);
criterion_main!(benches);
