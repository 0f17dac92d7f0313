use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use repool::{Factory, Pool};

struct Buffers;

impl Factory for Buffers {
    type Resource = Vec<u8>;
    type Error = std::convert::Infallible;

    fn create(&self) -> Result<Vec<u8>, Self::Error> {
        Ok(vec![0u8; 4096])
    }
}

fn pull_recycle(c: &mut Criterion) {
    let warm = Pool::with_capacity(Buffers, 64);
    warm.preheat(64).unwrap();
    c.bench_function("pull_recycle_hit", |b| {
        b.iter(|| {
            let buf = warm.pull().unwrap();
            warm.recycle(black_box(buf));
        })
    });

    let cold = Pool::with_capacity(Buffers, 0);
    c.bench_function("pull_recycle_miss", |b| {
        b.iter(|| {
            let buf = cold.pull().unwrap();
            cold.recycle(black_box(buf));
        })
    });
}

criterion_group!(benches, pull_recycle);
criterion_main!(benches);
