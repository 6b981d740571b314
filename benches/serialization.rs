use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use simple_format::{parse, simple, stringify, SimpleMap, Value};

fn small_document() -> Value {
    simple!({
        "id": 123,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true
    })
}

fn nested_document() -> Value {
    simple!({
        "id": 7,
        "metadata": {
            "created": "2024-01-01",
            "updated": "2024-06-15",
            "version": 3,
            "draft": false
        },
        "tags": ["alpha", "beta", "gamma", "delta"]
    })
}

fn sequence_document(len: usize) -> Value {
    let mut map = SimpleMap::new();
    map.insert(
        "items".to_string(),
        Value::Sequence((0..len).map(|n| Value::from(n as u32)).collect()),
    );
    Value::Mapping(map)
}

fn repetitive_document(len: usize) -> Value {
    let mut map = SimpleMap::new();
    map.insert(
        "flags".to_string(),
        Value::Sequence((0..len).map(|n| Value::from((n / 100) as u32)).collect()),
    );
    Value::Mapping(map)
}

fn benchmark_stringify_simple(c: &mut Criterion) {
    let doc = small_document();
    c.bench_function("stringify_small_document", |b| {
        b.iter(|| stringify(black_box(&doc)))
    });
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = stringify(&small_document());
    c.bench_function("parse_small_document", |b| {
        b.iter(|| parse(black_box(&text)))
    });
}

fn benchmark_stringify_nested(c: &mut Criterion) {
    let doc = nested_document();
    c.bench_function("stringify_nested_document", |b| {
        b.iter(|| stringify(black_box(&doc)))
    });
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let text = stringify(&nested_document());
    c.bench_function("parse_nested_document", |b| {
        b.iter(|| parse(black_box(&text)))
    });
}

fn benchmark_stringify_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify_sequence");
    for size in [10, 100, 1000].iter() {
        let doc = sequence_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| stringify(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_parse_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sequence");
    for size in [10, 100, 1000].iter() {
        let text = stringify(&sequence_document(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

// Long runs of equal elements collapse to range lines; this measures the
// run-detection cost and the fan-out cost of reading the result back.
fn benchmark_run_length(c: &mut Criterion) {
    let doc = repetitive_document(1000);
    let text = stringify(&doc);

    let mut group = c.benchmark_group("run_length");
    group.bench_function("stringify", |b| b.iter(|| stringify(black_box(&doc))));
    group.bench_function("parse", |b| b.iter(|| parse(black_box(&text))));
    group.finish();
}

fn benchmark_comments(c: &mut Criterion) {
    let text = "\
// header comment
name: sam  # trailing
/* block
   comment */
port: 8080
tags: [a, b, c] // done
";
    c.bench_function("parse_with_comments", |b| {
        b.iter(|| parse(black_box(text)))
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let doc = nested_document();
    c.bench_function("roundtrip_nested", |b| {
        b.iter(|| {
            let text = stringify(black_box(&doc));
            parse(black_box(&text))
        })
    });
}

criterion_group!(
    benches,
    benchmark_stringify_simple,
    benchmark_parse_simple,
    benchmark_stringify_nested,
    benchmark_parse_nested,
    benchmark_stringify_sequence,
    benchmark_parse_sequence,
    benchmark_run_length,
    benchmark_comments,
    benchmark_roundtrip
);
criterion_main!(benches);
