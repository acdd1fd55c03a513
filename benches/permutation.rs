use kpermute::{Permutation32, Permutation64, permute32_seed, permute64_seed};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_table(c: &mut Criterion) {
    let perm = permute32_seed(12, 1, 0).unwrap();
    c.bench_function("table 32 encode", |b| {
        b.iter(|| perm.encode_unchecked(black_box(7)))
    });
}

pub fn bench_bounded32(c: &mut Criterion) {
    let perm = permute32_seed(1_000_000, 1, 0).unwrap();
    c.bench_function("bounded32 encode", |b| {
        b.iter(|| perm.encode_unchecked(black_box(12345)))
    });
    c.bench_function("bounded32 decode", |b| {
        b.iter(|| perm.decode_unchecked(black_box(12345)))
    });
}

pub fn bench_bounded64(c: &mut Criterion) {
    let perm = permute64_seed(1_000_000_000_000, 1, 0).unwrap();
    c.bench_function("bounded64 encode", |b| {
        b.iter(|| perm.encode_unchecked(black_box(123_456_789)))
    });
}

pub fn bench_full_word32(c: &mut Criterion) {
    let perm = permute32_seed(-1, 1, 0).unwrap();
    c.bench_function("full_word32 encode", |b| {
        b.iter(|| perm.encode_unchecked(black_box(0xDEAD_BEEFu32 as i32)))
    });
}

pub fn bench_full_word64(c: &mut Criterion) {
    let perm = permute64_seed(-1, 1, 0).unwrap();
    c.bench_function("full_word64 encode", |b| {
        b.iter(|| perm.encode_unchecked(black_box(0xDEAD_BEEF_0000_1234u64 as i64)))
    });
}

criterion_group!(
    benches,
    bench_table,
    bench_bounded32,
    bench_bounded64,
    bench_full_word32,
    bench_full_word64
);
criterion_main!(benches);
