use criterion::BenchmarkId;
use criterion::Criterion;

use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cricket_sim::core::random_xi;
use cricket_sim::engine::MatchSimulationBuilder;
use cricket_sim::engine::MatchState;
use cricket_sim::engine::match_state::MatchConfig;

fn run_one_match(overs: u32, seed: u64) -> MatchState {
    let mut rng = StdRng::seed_from_u64(seed);
    let home = random_xi(&mut rng, "Mumbai", "MUM");
    let away = random_xi(&mut rng, "Chennai", "CHE");

    let mut sim = MatchSimulationBuilder::default()
        .home_team(home)
        .away_team(away)
        .config(MatchConfig {
            overs,
            ..MatchConfig::default()
        })
        .build(&mut rng)
        .unwrap();
    sim.run(&mut rng);
    sim.state
}

fn bench_match_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_match");
    for overs in [5u32, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(overs), &overs, |b, overs| {
            b.iter(|| run_one_match(*overs, 420));
        });
    }
    group.finish();
}

fn bench_single_over(c: &mut Criterion) {
    c.bench_function("single_over", |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(420);
                let home = random_xi(&mut rng, "Mumbai", "MUM");
                let away = random_xi(&mut rng, "Chennai", "CHE");
                let sim = MatchSimulationBuilder::default()
                    .home_team(home)
                    .away_team(away)
                    .build(&mut rng)
                    .unwrap();
                (sim, rng)
            },
            |(mut sim, mut rng)| sim.simulate_over(&mut rng),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_match_lengths, bench_single_over);
criterion_main!(benches);
