use blurhash_decode::{base83, decode, decode_many, decode_rgba, ComponentGrid, DecodeOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const FIXTURE_HASH: &str = "LKO2?U%2Tw=w]~RBVZRi};RPxuwH";

/// A 9x9-component hash with every AC digit close to zero.
fn max_components_hash() -> String {
    let mut hash = String::with_capacity(166);
    // size flag 80 = 9x9
    base83::encode_into(80, 1, &mut hash).unwrap();
    base83::encode_into(40, 1, &mut hash).unwrap();
    base83::encode_into(0x80_80_80, 4, &mut hash).unwrap();
    for _ in 1..81 {
        base83::encode_into(10 * 361 + 8 * 19 + 10, 2, &mut hash).unwrap();
    }
    hash
}

// ---------------------------------------------------------------------------
// Decode benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &(w, h) in &[(32u32, 32u32), (128, 128), (256, 256)] {
        let label = format!("{w}x{h}");
        group.throughput(Throughput::Elements((w as u64) * (h as u64)));
        group.bench_with_input(BenchmarkId::new("rgb_4x3", &label), &FIXTURE_HASH, |b, hash| {
            b.iter(|| decode(hash, w, h, 1.0).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("rgba_4x3", &label), &FIXTURE_HASH, |b, hash| {
            b.iter(|| decode_rgba(hash, w, h, 1.0).unwrap());
        });
    }

    group.finish();
}

fn bench_decode_component_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_components");

    let hashes = [("4x3", FIXTURE_HASH.to_string()), ("9x9", max_components_hash())];
    for (label, hash) in &hashes {
        group.bench_with_input(BenchmarkId::new("32x32", label), hash, |b, hash| {
            b.iter(|| decode(hash, 32, 32, 1.0).unwrap());
        });
    }

    group.finish();
}

fn bench_decode_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_many");

    let hashes = vec![FIXTURE_HASH; 64];
    group.throughput(Throughput::Elements(hashes.len() as u64));
    group.bench_function("64x_32x32", |b| {
        b.iter(|| decode_many(&hashes, 32, 32, &DecodeOptions::default()));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Parsing benchmarks
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("component_grid_4x3", |b| {
        b.iter(|| ComponentGrid::parse(FIXTURE_HASH, 1.0).unwrap());
    });

    group.bench_function("base83_decode_4_chars", |b| {
        b.iter(|| base83::decode("HV6n").unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_decode,
    bench_decode_component_counts,
    bench_decode_many,
    bench_parse,
);
criterion_main!(benches);
