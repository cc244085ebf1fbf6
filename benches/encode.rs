use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_gen::encoder::reed_solomon::ReedSolomonEncoder;
use rust_qr_gen::{encode, encode_batch};

fn bench_encode_short(c: &mut Criterion) {
    c.bench_function("encode_short_v1", |b| {
        b.iter(|| encode(black_box("STNEST-abc123")))
    });
}

fn bench_encode_largest(c: &mut Criterion) {
    let text = "x".repeat(154);
    c.bench_function("encode_154_bytes_v7", |b| b.iter(|| encode(black_box(&text))));
}

fn bench_encode_truncated(c: &mut Criterion) {
    let text = "y".repeat(300);
    c.bench_function("encode_300_bytes_truncated", |b| {
        b.iter(|| encode(black_box(&text)))
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let data: Vec<u8> = (0..156u32).map(|i| (i * 13) as u8).collect();
    let encoder = ReedSolomonEncoder::new(40);
    c.bench_function("reed_solomon_156_40", |b| {
        b.iter(|| encoder.encode(black_box(&data)))
    });
}

fn bench_encode_batch(c: &mut Criterion) {
    let texts: Vec<String> = (0..256).map(|i| format!("STNEST-{:06}", i)).collect();
    c.bench_function("encode_batch_256", |b| b.iter(|| encode_batch(black_box(&texts))));
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_largest,
    bench_encode_truncated,
    bench_reed_solomon,
    bench_encode_batch
);
criterion_main!(benches);
