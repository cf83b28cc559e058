use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha256, Sha512};
use std::hint::black_box;

pub fn bench_sha2_crate(c: &mut Criterion) {
    c.bench_function("sha2::Sha256 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha256::new();
            hasher.update(black_box(&[0u8; 64]));
            black_box(hasher.finalize());
        })
    });

    c.bench_function("sha2::Sha512 128 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha512::new();
            hasher.update(black_box(&[0u8; 128]));
            black_box(hasher.finalize());
        })
    });
}

criterion_group!(benches, bench_sha2_crate);
criterion_main!(benches);
