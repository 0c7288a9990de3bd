//! benches/simulation.rs
//! Run with:  cargo bench --bench simulation
//! HTML:      target/criterion/report/index.html

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use forex_alpha_agents::{
    ForexPair, SimulationOptions, build_price_path, optimize_agent_configs, simulate_agents,
};
use std::hint::black_box;

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const PATH_LENGTHS: &[usize] = &[260, 520, 2_000];
const SEARCH_ITERATIONS: &[usize] = &[8, 36];

pub fn bench_price_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_path");

    for &days in PATH_LENGTHS {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_function(BenchmarkId::from_parameter(days), |b| {
            b.iter(|| black_box(build_price_path(ForexPair::EurUsd, black_box(days), "institutional")))
        });
    }

    group.finish();
}

pub fn bench_simulate_agents(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_agents");
    let options = SimulationOptions::default();

    for &days in PATH_LENGTHS {
        // "elements" = agent-days evaluated
        group.throughput(Throughput::Elements(5 * days as u64));
        group.bench_function(BenchmarkId::from_parameter(days), |b| {
            b.iter(|| {
                let results =
                    simulate_agents(ForexPair::GbpUsd, black_box(days), "macro_regime", &options);
                black_box(results)
            })
        });
    }

    group.finish();
}

pub fn bench_optimizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_agent_configs");
    group.sample_size(10);
    let options = SimulationOptions::default();

    for &iterations in SEARCH_ITERATIONS {
        let id = BenchmarkId::from_parameter(format!("days_520_iter_{}", iterations));
        group.bench_function(id, |b| {
            b.iter(|| {
                let results = optimize_agent_configs(
                    ForexPair::UsdJpy,
                    520,
                    "institutional",
                    &options,
                    black_box(iterations),
                );
                black_box(results)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_price_path, bench_simulate_agents, bench_optimizer);
criterion_main!(benches);
