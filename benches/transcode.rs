//! Throughput of UTF-8 decoding, UTF-8 encoding and pairwise precomposition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ucs2_rs::{decode_utf8, encode_utf8, precompose, Ucs2Buf};

const SAMPLES: [(&str, &str); 3] = [
    ("ascii", "The quick brown fox jumps over the lazy dog. "),
    ("latin", "Ça été très différent, über alles, señor. "),
    ("cjk", "日本語のテキストとかなの文字列です。"),
];

fn text(sample: &str) -> String {
    sample.repeat(64)
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_utf8");
    for (name, sample) in SAMPLES {
        let input = text(sample);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| decode_utf8(black_box(input.as_bytes())))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_utf8");
    for (name, sample) in SAMPLES {
        let units = Ucs2Buf::from(text(sample).as_str());
        group.throughput(Throughput::Elements(units.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &units, |b, units| {
            b.iter(|| encode_utf8(black_box(units)))
        });
    }
    group.finish();
}

fn bench_precompose(c: &mut Criterion) {
    c.bench_function("precompose_hit", |b| {
        b.iter(|| precompose(black_box(0x0065), black_box(0x0301)))
    });
    c.bench_function("precompose_miss", |b| {
        b.iter(|| precompose(black_box(0x0065), black_box(0x0065)))
    });

    let decomposed = Ucs2Buf::from("Cafe\u{301} a\u{300} la carte, n\u{303}o. ".repeat(64).as_str());
    let mut group = c.benchmark_group("precomposed");
    group.throughput(Throughput::Elements(decomposed.len() as u64));
    group.bench_function("iterator", |b| {
        b.iter(|| black_box(&decomposed).precomposed().collect::<Ucs2Buf>())
    });
    group.bench_function("in_place", |b| {
        b.iter(|| {
            let mut units = decomposed.clone();
            units.precompose();
            units
        })
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_precompose);
criterion_main!(benches);
