use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use genequation::{
    chromosome::decode, gene::Gene, population::Population, rng::RandomNumberGenerator,
};

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    for size in [20, 140, 1000, 4000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let rng = RandomNumberGenerator::from_seed(42);
            // A distant target keeps the population evolving.
            let mut population =
                Population::with_rng(1_000_000_007, size, 15, 0.2, rng).unwrap();
            b.iter(|| population.next_generation().unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(7);
    let genes: Vec<Gene> = (0..15).map(|_| rng.sample()).collect();

    c.bench_function("decode_15_genes", |b| b.iter(|| decode(black_box(&genes))));
}

criterion_group!(benches, bench_next_generation, bench_decode);
criterion_main!(benches);
