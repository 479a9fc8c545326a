use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use street_address_rs::{StreetParser, SuffixTable, filters};

fn bench_street_parsing(c: &mut Criterion) {
    let parser = StreetParser::new();

    c.bench_function("parse_standard_street", |b| {
        b.iter(|| parser.parse(black_box("201 E Randolph St")))
    });

    c.bench_function("parse_fractional_street", |b| {
        b.iter(|| parser.parse(black_box("123 1/2 BLUEMOUND RD")))
    });

    c.bench_function("parse_batch", |b| {
        let lines = [
            "201 E Randolph St",
            "12341 (PO Box)",
            "111-222 E Randolph St",
            "11782 Rd 39.4",
            "N6W23001 BLUEMOUND RD",
            "123 1/2 BLUEMOUND RD",
        ];
        b.iter(|| parser.parse_batch(black_box(&lines)))
    });
}

fn bench_lookups(c: &mut Criterion) {
    let table = SuffixTable::usps();

    c.bench_function("suffix_lookup", |b| {
        b.iter(|| table.lookup(black_box("Blvd.")))
    });

    c.bench_function("clean_street_number", |b| {
        b.iter(|| filters::street_number_chars(black_box("#N6W23001,")))
    });
}

criterion_group!(benches, bench_street_parsing, bench_lookups);
criterion_main!(benches);
