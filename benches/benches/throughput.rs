//! Keepsake Criterion Benchmark
//!
//! Measures the reference engine against the RustCrypto implementations.
//! The engine is a bit-exact reference, not a performance play; the
//! comparison keeps regressions in the quadratic GHASH and scalar
//! permutation visible.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use sha3::{Digest, Keccak256};

const KB: usize = 1024;

// =============================================================================
// BENCHMARK 1: KECCAK-256
// =============================================================================

fn bench_keccak(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Keccak-256");

    let sizes = [(64, "64B"), (KB, "1KB"), (16 * KB, "16KB"), (128 * KB, "128KB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("keepsake", name),
            &input,
            |b, data| b.iter(|| keepsake::keccak::hash(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("sha3-crate", name),
            &input,
            |b, data| b.iter(|| Keccak256::digest(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BIT-GRANULAR PATH
// =============================================================================

fn bench_keccak_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Keccak-Bit-Path");

    for (size, name) in [(64, "64B"), (KB, "1KB")] {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        let bits = keepsake::convert::bytes_to_bits(&input);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &bits,
            |b, data| b.iter(|| keepsake::keccak::hash_bits(black_box(data)).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: AES-256-GCM SEAL
// =============================================================================

fn bench_gcm(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-AES-256-GCM");

    let key = [0x6Bu8; 32];
    let iv = [0x42u8; 12];
    let reference = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    for (size, name) in [(KB, "1KB"), (16 * KB, "16KB"), (128 * KB, "128KB")] {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("keepsake", name),
            &input,
            |b, data| {
                b.iter(|| keepsake::gcm::encrypt(black_box(data), &key, &iv, b"").unwrap());
            },
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("aes-gcm-crate", name),
            &input,
            |b, data| {
                b.iter(|| {
                    reference
                        .encrypt(
                            Nonce::from_slice(&iv),
                            Payload {
                                msg: black_box(data),
                                aad: b"",
                            },
                        )
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_keccak, bench_keccak_bits, bench_gcm);
criterion_main!(benches);
