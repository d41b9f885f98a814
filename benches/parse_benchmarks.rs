use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dtcg_core::{parse_dtcg, DtcgParserConfig};
use serde_json::{json, Value};

// ============================================================================
// Test Data: Varying Depth and Width
// ============================================================================

/// A flat group with `width` color tokens.
fn flat_document(width: usize) -> Value {
    let mut root = serde_json::Map::new();
    root.insert("$type".to_string(), json!("color"));
    for i in 0..width {
        root.insert(format!("token-{i}"), json!({ "$value": format!("#{i:06x}") }));
    }
    Value::Object(root)
}

/// Nested groups, `depth` levels deep, with a handful of tokens per level.
fn nested_document(depth: usize) -> Value {
    let mut node = json!({
        "leaf": { "$type": "dimension", "$value": "4px" },
    });
    for level in 0..depth {
        node = json!({
            "$description": format!("level {level}"),
            "a": { "$value": 1 },
            "b": { "$value": 2 },
            "child": node,
        });
    }
    node
}

fn count_tokens(data: &Value) -> usize {
    let mut count = 0;
    parse_dtcg(
        data,
        DtcgParserConfig::<(), ()> {
            handle_design_token: Box::new(|_, _, _, _, _| count += 1),
            handle_group: None,
            add_to_group: None,
            format: None,
        },
    )
    .unwrap();
    count
}

fn bench_flat_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");
    for width in [10, 100, 1000] {
        let data = flat_document(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &data, |b, data| {
            b.iter(|| count_tokens(black_box(data)));
        });
    }
    group.finish();
}

fn bench_nested_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");
    for depth in [4, 16, 64] {
        let data = nested_document(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &data, |b, data| {
            b.iter(|| count_tokens(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flat_documents, bench_nested_documents);
criterion_main!(benches);
