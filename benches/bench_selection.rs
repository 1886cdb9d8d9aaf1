use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bitga::evolution::{GaOptions, GeneticAlgorithm, SelectionMethod};
use bitga::rng::RandomNumberGenerator;
use bitga::selection::{
    RemainderStochasticSelection, RouletteWheelSelection, SelectionStrategy,
    StochasticUniversalSelection, TournamentSelection,
};

fn bench_select(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);
    let fitness: Vec<f64> = (0..100).map(|_| rng.gen_range(0.1, 2.5)).collect();

    let strategies: Vec<(&str, Box<dyn SelectionStrategy>)> = vec![
        ("sus", Box::new(StochasticUniversalSelection::new())),
        ("roulette", Box::new(RouletteWheelSelection::new())),
        ("remainder", Box::new(RemainderStochasticSelection::new())),
        ("tournament", Box::new(TournamentSelection::new(3).unwrap())),
    ];

    let mut group = c.benchmark_group("select_two_parents");
    for (name, strategy) in &strategies {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let parents = strategy.select(black_box(&fitness), black_box(&mut rng));
                assert!(parents.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run_20_generations");
    for method in [
        SelectionMethod::StochasticUniversal,
        SelectionMethod::RouletteWheel,
        SelectionMethod::StochasticRemainder,
        SelectionMethod::Tournament,
    ] {
        group.bench_function(method.to_string(), |b| {
            let options = GaOptions::builder()
                .num_generations(20)
                .selection_method(method)
                .build();
            let algorithm = GeneticAlgorithm::from_options(options).unwrap();
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(42);
                let best = algorithm.run(black_box(&mut rng));
                assert!(best.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select, bench_full_run);
criterion_main!(benches);
