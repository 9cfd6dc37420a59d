use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kselect::{floyd_rivest_in_place, quickselect_in_place};

fn random_data(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_median");
    for size in [1_000, 10_000, 100_000] {
        let data = random_data(size, 0xC0FFEE);
        let k = size / 2;

        group.bench_with_input(BenchmarkId::new("quickselect", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |scratch| quickselect_in_place(scratch, k).unwrap(),
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("floyd_rivest", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |scratch| floyd_rivest_in_place(scratch, k).unwrap(),
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("full_sort", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |scratch| {
                    scratch.sort_unstable();
                    scratch[k]
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
