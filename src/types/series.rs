// src/types/series.rs

use crate::simulators::regime::Regime;
use serde::{Deserialize, Serialize};

/// One day of the synthetic price path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub index: usize,
    /// Business-day date, e.g. `2024-01-01`.
    pub label: String,
    pub price: f64,
    /// Regime that generated this day's move. Internal to the engine.
    #[serde(skip)]
    pub regime: Regime,
}

/// One day of an agent's equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub index: usize,
    pub label: String,
    pub equity: f64,
}
