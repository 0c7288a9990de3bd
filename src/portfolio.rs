// src/portfolio.rs

//! Pod-level views over one result list: the leading agent, per-column
//! winners, and a blend of all agents weighted toward low drawdown.

use crate::types::SimulationResult;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scenario seeds offered out of the box.
pub const DEFAULT_SEEDS: [&str; 4] = ["institutional", "macro_regime", "vol_compression", "dollar_cycle"];

/// Drawdown below this counts as this much when weighting the blend.
pub const BLEND_MIN_WEIGHT_DRAWDOWN: f64 = 0.08;
pub const BLEND_DRAWDOWN_OFFSET: f64 = 0.02;

/// A fresh scenario seed such as `macro_regime_4821`.
///
/// This is caller-side convenience; the engine itself never draws from an
/// unseeded generator.
pub fn random_scenario_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = DEFAULT_SEEDS[rng.gen_range(0..DEFAULT_SEEDS.len())];
    format!("{}_{}", base, rng.gen_range(0..10_000))
}

/// Inverse-drawdown weighted averages across the pod.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendedMetrics {
    pub blended_return: f64,
    pub blended_drawdown: f64,
    pub blended_sharpe: f64,
}

/// Everything the dashboard headline needs from a result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSummary {
    pub leader_id: String,
    pub best_by_return: String,
    pub best_by_drawdown: String,
    pub best_risk_adjusted: String,
    pub blended: BlendedMetrics,
}

/// First result with the strictly highest value of `key`.
fn best_by<F>(results: &[SimulationResult], key: F) -> Option<&SimulationResult>
where
    F: Fn(&SimulationResult) -> f64,
{
    let mut best: Option<&SimulationResult> = None;
    for item in results {
        match best {
            Some(current) if key(item) <= key(current) => {}
            _ => best = Some(item),
        }
    }
    best
}

/// The agent with the highest risk score.
pub fn leader(results: &[SimulationResult]) -> Option<&SimulationResult> {
    best_by(results, |r| r.metrics.risk_score)
}

pub fn best_by_return(results: &[SimulationResult]) -> Option<&SimulationResult> {
    best_by(results, |r| r.metrics.annualized_return)
}

/// Lowest max drawdown wins.
pub fn best_by_drawdown(results: &[SimulationResult]) -> Option<&SimulationResult> {
    best_by(results, |r| -r.metrics.max_drawdown)
}

pub fn blended_metrics(results: &[SimulationResult]) -> Option<BlendedMetrics> {
    if results.is_empty() {
        return None;
    }
    let weights: Vec<f64> = results
        .iter()
        .map(|r| 1.0 / BLEND_MIN_WEIGHT_DRAWDOWN.max(r.metrics.max_drawdown + BLEND_DRAWDOWN_OFFSET))
        .collect();
    let total: f64 = weights.iter().sum();

    let blend = |field: fn(&SimulationResult) -> f64| -> f64 {
        results
            .iter()
            .zip(&weights)
            .map(|(r, w)| field(r) * w / total)
            .sum()
    };

    Some(BlendedMetrics {
        blended_return: blend(|r| r.metrics.annualized_return),
        blended_drawdown: blend(|r| r.metrics.max_drawdown),
        blended_sharpe: blend(|r| r.metrics.sharpe),
    })
}

impl PodSummary {
    /// `None` for an empty result list.
    pub fn from_results(results: &[SimulationResult]) -> Option<Self> {
        let leader = leader(results)?;
        Some(Self {
            leader_id: leader.agent.id.clone(),
            best_by_return: best_by_return(results)?.agent.id.clone(),
            best_by_drawdown: best_by_drawdown(results)?.agent.id.clone(),
            best_risk_adjusted: leader.agent.id.clone(),
            blended: blended_metrics(results)?,
        })
    }
}
