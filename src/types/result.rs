// src/types/result.rs

use crate::agents::roster::Agent;
use crate::types::series::EquityPoint;
use serde::{Deserialize, Serialize};

/// Summary statistics of one agent run. Every field is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub annualized_return: f64,
    /// Worst peak-to-trough loss as a fraction of the peak, in `[0, 1]`.
    pub max_drawdown: f64,
    pub sharpe: f64,
    /// Fraction of closed trades with a positive outcome, in `[0, 1]`.
    pub win_rate: f64,
    pub profit_factor: f64,
    /// Single ranking key, higher is better.
    pub risk_score: f64,
}

impl Metrics {
    pub fn is_finite(&self) -> bool {
        [
            self.annualized_return,
            self.max_drawdown,
            self.sharpe,
            self.win_rate,
            self.profit_factor,
            self.risk_score,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub agent: Agent,
    pub metrics: Metrics,
    pub equity_curve: Vec<EquityPoint>,
}
