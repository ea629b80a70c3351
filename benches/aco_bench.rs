//! Criterion benchmarks for the colony engine.
//!
//! Uses cities on a circle so tour quality is easy to reason about and
//! timings reflect pure algorithm overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_antcolony::aco::{
    weighted_choice, AcoConfig, AcoRunner, City, CityMap, PheromoneTable, TransitionRule,
};

fn circle(n: usize) -> CityMap {
    let cities = (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            City::new(i, a.cos() * 100.0, a.sin() * 100.0)
        })
        .collect();
    CityMap::new(cities).expect("valid instance")
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_run");
    group.sample_size(20);

    for &n in &[10usize, 30, 60] {
        let cities = circle(n);
        let config = AcoConfig::default()
            .with_population_size(20)
            .with_max_iterations(50)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::new("offline", n), &cities, |b, cities| {
            b.iter(|| AcoRunner::run(black_box(cities), &config).expect("run"));
        });

        let online = config.clone().with_online_pheromone_update(true);
        group.bench_with_input(BenchmarkId::new("online", n), &cities, |b, cities| {
            b.iter(|| AcoRunner::run(black_box(cities), &online).expect("run"));
        });
    }
    group.finish();
}

fn bench_transition(c: &mut Criterion) {
    let cities = circle(100);
    let table = PheromoneTable::new(100, 1.0, 1e-10);
    let rule = TransitionRule::new(1.0, 2.0);
    let candidates: Vec<usize> = (1..100).collect();

    c.bench_function("transition_select_100", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| rule.select(&cities, &table, 0, black_box(&candidates), &mut rng));
    });

    let weights: Vec<f64> = (1..=100).map(|i| i as f64).collect();
    c.bench_function("weighted_choice_100", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| weighted_choice(black_box(&weights), &mut rng));
    });
}

fn bench_pheromone(c: &mut Criterion) {
    let tour: Vec<usize> = (0..200).collect();
    c.bench_function("evaporate_deposit_200", |b| {
        let mut table = PheromoneTable::new(200, 1.0, 1e-10);
        b.iter(|| {
            table.evaporate(0.9);
            table.deposit(black_box(&tour), 1000.0, AcoConfig::default().deposit_policy());
        });
    });
}

criterion_group!(benches, bench_run, bench_transition, bench_pheromone);
criterion_main!(benches);
