// src/market.rs

use crate::agents::evaluator::evaluate;
use crate::agents::roster::{Agent, roster};
use crate::error::{EngineResult, validate_length};
use crate::metrics::compute_metrics;
use crate::pairs::ForexPair;
use crate::simulators::path::build_price_path;
use crate::types::{PricePoint, SimulationOptions, SimulationResult};
use tracing::{debug, info, warn};

/// This is the main simulation engine. It owns the world state of one call
/// (the shared price path) and runs agents against it.
///
/// Every agent evaluated by the same `Market` sees the identical path.
#[derive(Debug, Clone)]
pub struct Market {
    pair: ForexPair,
    options: SimulationOptions,
    path: Vec<PricePoint>,
}

impl Market {
    /// Validates the inputs and builds the price path for this scenario.
    pub fn new(
        pair: ForexPair,
        length: usize,
        seed: &str,
        options: SimulationOptions,
    ) -> EngineResult<Self> {
        validate_length(length)?;
        options.validate()?;

        let path = build_price_path(pair, length, seed);
        Ok(Self {
            pair,
            options,
            path,
        })
    }

    /// A public getter for callers that want to inspect the synthetic path.
    pub fn path(&self) -> &[PricePoint] {
        &self.path
    }

    /// Evaluator plus metrics for one agent.
    pub fn evaluate(&self, agent: &Agent) -> SimulationResult {
        let run = evaluate(&agent.params, &self.pair.profile(), &self.path, &self.options);
        let metrics = compute_metrics(&run.equity_curve, &run.trade_outcomes);

        if run.liquidated {
            warn!(agent = %agent.id, "agent was liquidated");
        }
        debug!(
            agent = %agent.id,
            trades = run.trade_outcomes.len(),
            annualized_return = metrics.annualized_return,
            max_drawdown = metrics.max_drawdown,
            risk_score = metrics.risk_score,
            "agent evaluated"
        );

        SimulationResult {
            agent: agent.clone(),
            metrics,
            equity_curve: run.equity_curve,
        }
    }

    /// One result per agent, in the order given.
    pub fn run(&self, agents: &[Agent]) -> Vec<SimulationResult> {
        agents.iter().map(|agent| self.evaluate(agent)).collect()
    }
}

/// Runs the whole roster against one freshly generated path.
///
/// Pure function of its inputs: identical arguments give bit-identical results.
pub fn simulate_agents(
    pair: ForexPair,
    length: usize,
    seed: &str,
    options: &SimulationOptions,
) -> EngineResult<Vec<SimulationResult>> {
    let market = Market::new(pair, length, seed, *options)?;
    info!(%pair, length, seed, "simulating agent roster");
    Ok(market.run(roster()))
}
