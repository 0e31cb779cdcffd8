use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use tagcloud::Layouter;
use tagcloud::geometry::primitives::{Point, Size};

criterion_main!(benches);
criterion_group!(benches, place_random_sizes_bench);

const N_RECTS: [usize; 3] = [50, 200, 500];

/// Benchmark how long it takes to lay out a full cloud of random tag sizes, for different cloud sizes.
fn place_random_sizes_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_random_sizes");
    group.sample_size(10);
    for n_rects in N_RECTS {
        let mut rng = SmallRng::seed_from_u64(0);
        let sizes = (0..n_rects)
            .map(|_| Size::new(rng.random_range(10..100), rng.random_range(1..41)))
            .collect::<Vec<_>>();

        group.throughput(criterion::Throughput::Elements(n_rects as u64));
        group.bench_function(BenchmarkId::from_parameter(n_rects), |b| {
            b.iter(|| {
                let mut layouter = Layouter::new(Point(0, 0));
                for &size in &sizes {
                    layouter.place_next(size).unwrap();
                }
                layouter.n_placed()
            })
        });
    }
    group.finish();
}
