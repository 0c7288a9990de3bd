// src/optimizer.rs

//! Local search over agent strategy parameters.
//!
//! Each agent starts from its roster parameters (candidate 0) and tries
//! `iterations` perturbations of the best parameters found so far, all on the
//! same price path. A candidate only replaces the incumbent on a strictly
//! higher risk score, so the result is never worse than the baseline.

use crate::agents::config::{
    BASE_SIZING_BOUNDS, MIN_WEIGHT_JITTER_SCALE, OPTIMIZER_JITTER, STOP_DISTANCE_BOUNDS,
    WEIGHT_BOUNDS,
};
use crate::agents::roster::{Agent, StrategyParams, roster};
use crate::error::{EngineResult, validate_iterations};
use crate::market::Market;
use crate::pairs::ForexPair;
use crate::rng::ScenarioRng;
use crate::types::{SimulationOptions, SimulationResult};
use rayon::prelude::*;
use tracing::{debug, info};

fn jitter(value: f64, scale: f64, rng: &mut ScenarioRng, bounds: (f64, f64)) -> f64 {
    (value + OPTIMIZER_JITTER * scale * rng.next_gaussian()).clamp(bounds.0, bounds.1)
}

/// A random neighbour of `params`, kept inside the search bounds.
pub fn perturb(params: &StrategyParams, rng: &mut ScenarioRng) -> StrategyParams {
    let weight = |value: f64, rng: &mut ScenarioRng| {
        jitter(value, value.max(MIN_WEIGHT_JITTER_SCALE), rng, WEIGHT_BOUNDS)
    };
    StrategyParams {
        trend_weight: weight(params.trend_weight, rng),
        mean_reversion_weight: weight(params.mean_reversion_weight, rng),
        volatility_weight: weight(params.volatility_weight, rng),
        stop_distance: jitter(params.stop_distance, params.stop_distance, rng, STOP_DISTANCE_BOUNDS),
        base_sizing: jitter(params.base_sizing, params.base_sizing, rng, BASE_SIZING_BOUNDS),
    }
}

/// Best-of search for one agent on `market`.
pub fn tune_agent(market: &Market, seed: &str, agent: &Agent, iterations: usize) -> SimulationResult {
    let mut best = market.evaluate(agent);
    let baseline = best.metrics.risk_score;

    for candidate in 1..=iterations {
        let index = candidate.to_string();
        let mut rng = ScenarioRng::derive(seed, &[agent.id.as_str(), index.as_str()]);
        let params = perturb(&best.agent.params, &mut rng);
        let trial = market.evaluate(&agent.with_params(params));
        if trial.metrics.risk_score > best.metrics.risk_score {
            best = trial;
        }
    }

    debug!(
        agent = %agent.id,
        baseline,
        tuned = best.metrics.risk_score,
        "agent search finished"
    );
    best
}

/// Tunes every roster agent on one shared path and returns the best variant
/// of each, in roster order. Per-agent searches run in parallel.
pub fn optimize_agent_configs(
    pair: ForexPair,
    length: usize,
    seed: &str,
    options: &SimulationOptions,
    iterations: usize,
) -> EngineResult<Vec<SimulationResult>> {
    validate_iterations(iterations)?;
    let market = Market::new(pair, length, seed, *options)?;
    info!(%pair, length, seed, iterations, "optimizing agent roster");

    Ok(roster()
        .par_iter()
        .map(|agent| tune_agent(&market, seed, agent, iterations))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::simulate_agents;

    #[test]
    fn perturbation_stays_in_bounds() {
        let mut rng = ScenarioRng::from_seed_str("bounds");
        let mut params = roster()[0].params;
        for _ in 0..2_000 {
            params = perturb(&params, &mut rng);
            for w in [
                params.trend_weight,
                params.mean_reversion_weight,
                params.volatility_weight,
            ] {
                assert!((WEIGHT_BOUNDS.0..=WEIGHT_BOUNDS.1).contains(&w));
            }
            assert!(
                (STOP_DISTANCE_BOUNDS.0..=STOP_DISTANCE_BOUNDS.1).contains(&params.stop_distance)
            );
            assert!((BASE_SIZING_BOUNDS.0..=BASE_SIZING_BOUNDS.1).contains(&params.base_sizing));
        }
    }

    #[test]
    fn zero_weights_can_still_move() {
        let mut rng = ScenarioRng::from_seed_str("zero");
        let params = StrategyParams::new(0.0, 0.0, 0.0, 0.01, 0.5);
        let moved = (0..20).any(|_| perturb(&params, &mut rng).mean_reversion_weight > 0.0);
        assert!(moved);
    }

    #[test]
    fn never_worse_than_baseline() {
        let opts = SimulationOptions::default();
        let base = simulate_agents(ForexPair::EurUsd, 300, "institutional", &opts).unwrap();
        let tuned = optimize_agent_configs(ForexPair::EurUsd, 300, "institutional", &opts, 8).unwrap();
        assert_eq!(base.len(), tuned.len());
        for (b, t) in base.iter().zip(&tuned) {
            assert_eq!(b.agent.id, t.agent.id);
            assert!(t.metrics.risk_score >= b.metrics.risk_score);
        }
    }

    #[test]
    fn search_is_reproducible() {
        let opts = SimulationOptions::default();
        let a = optimize_agent_configs(ForexPair::UsdCad, 240, "dollar_cycle", &opts, 5).unwrap();
        let b = optimize_agent_configs(ForexPair::UsdCad, 240, "dollar_cycle", &opts, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let err = optimize_agent_configs(
            ForexPair::EurUsd,
            100,
            "x",
            &SimulationOptions::default(),
            0,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("iterations"));
    }

    #[test]
    fn roster_is_untouched_by_tuning() {
        let before: Vec<StrategyParams> = roster().iter().map(|a| a.params).collect();
        let _ = optimize_agent_configs(
            ForexPair::GbpUsd,
            200,
            "macro_regime",
            &SimulationOptions::default(),
            6,
        )
        .unwrap();
        let after: Vec<StrategyParams> = roster().iter().map(|a| a.params).collect();
        assert_eq!(before, after);
    }
}
