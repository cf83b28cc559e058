use cryptal_sha::hash::{Algorithm, Backend, HashContext, sha256, sha512};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_oneshot(c: &mut Criterion) {
    c.bench_function("sha256 64 bytes", |b| {
        b.iter(|| sha256(black_box(&[0u8; 64])))
    });

    c.bench_function("sha512 128 bytes", |b| {
        b.iter(|| sha512(black_box(&[0u8; 128])))
    });
}

pub fn bench_backends(c: &mut Criterion) {
    let data = vec![0x5au8; 16 * 1024];
    let mut group = c.benchmark_group("16 KiB");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for algorithm in Algorithm::ALL {
        for backend in Backend::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), backend),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut ctx = HashContext::with_backend(algorithm, backend);
                        ctx.update(black_box(data)).unwrap();
                        ctx.finalize().unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_oneshot, bench_backends);
criterion_main!(benches);
