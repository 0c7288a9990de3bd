// src/agents/roster.rs
//! The fixed pod of agents every simulation evaluates.
//
//! The roster is built once per process and never mutated. Tuning works on
//! copies made with [`Agent::with_params`].

use super::agent_trait::SignalModel;
use super::config::SIGNAL_DEADBAND;
use super::features::SignalFeatures;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Strategy knobs of one agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyParams {
    pub trend_weight: f64,
    pub mean_reversion_weight: f64,
    pub volatility_weight: f64,
    /// Adverse move from entry that closes a trade, as a fraction of price.
    pub stop_distance: f64,
    /// Base risk appetite: share of the capital budget deployed at full conviction.
    pub base_sizing: f64,
}

impl StrategyParams {
    pub const fn new(
        trend_weight: f64,
        mean_reversion_weight: f64,
        volatility_weight: f64,
        stop_distance: f64,
        base_sizing: f64,
    ) -> Self {
        Self {
            trend_weight,
            mean_reversion_weight,
            volatility_weight,
            stop_distance,
            base_sizing,
        }
    }
}

impl SignalModel for StrategyParams {
    fn signal(&self, features: &SignalFeatures) -> f64 {
        let raw = self.trend_weight * features.trend
            + self.mean_reversion_weight * features.mean_reversion
            + self.volatility_weight * features.breakout;
        let signal = raw.tanh();
        if signal.abs() < SIGNAL_DEADBAND || !signal.is_finite() {
            0.0
        } else {
            signal
        }
    }

    fn stop_distance(&self) -> f64 {
        self.stop_distance
    }

    fn base_sizing(&self) -> f64 {
        self.base_sizing
    }
}

/// Identity plus strategy of one pod member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub positioning: String,
    pub description: String,
    pub archetype_label: String,
    pub params: StrategyParams,
}

impl Agent {
    #[inline]
    pub fn new<T1, T2, T3, T4, T5>(
        id: T1,
        name: T2,
        positioning: T3,
        description: T4,
        archetype_label: T5,
        params: StrategyParams,
    ) -> Self
    where
        T1: Into<String>,
        T2: Into<String>,
        T3: Into<String>,
        T4: Into<String>,
        T5: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            positioning: positioning.into(),
            description: description.into(),
            archetype_label: archetype_label.into(),
            params,
        }
    }

    /// Same identity, different strategy knobs.
    pub fn with_params(&self, params: StrategyParams) -> Self {
        Self {
            params,
            ..self.clone()
        }
    }
}

static ROSTER: Lazy<Vec<Agent>> = Lazy::new(default_roster);

/// The process-wide roster, in display order.
pub fn roster() -> &'static [Agent] {
    &ROSTER
}

/// Looks an agent up by id.
pub fn find_agent(id: &str) -> Option<&'static Agent> {
    roster().iter().find(|agent| agent.id == id)
}

/// The pod as it boots. Order here is the order of every result list.
fn default_roster() -> Vec<Agent> {
    vec![
        Agent::new(
            "trend-sentinel",
            "Trend Sentinel",
            "Rides persistent macro trends with volatility-aware sizing",
            "Scales into sustained directional moves and cuts exposure when realized volatility outruns the trend.",
            "Trend Following",
            StrategyParams::new(1.6, 0.2, 0.3, 0.015, 0.9),
        ),
        Agent::new(
            "reversion-sage",
            "Reversion Sage",
            "Fades stretched moves back toward fair value",
            "Sells extensions above the rolling mean and buys washouts below it, with tight stops for regime breaks.",
            "Mean Reversion",
            StrategyParams::new(0.2, 1.5, 0.1, 0.010, 0.8),
        ),
        Agent::new(
            "breakout-hawk",
            "Breakout Hawk",
            "Pounces on volatility expansion out of quiet ranges",
            "Waits through compression and commits in the direction of the first volatility burst.",
            "Volatility Breakout",
            StrategyParams::new(0.6, 0.0, 1.4, 0.012, 0.7),
        ),
        Agent::new(
            "carry-compass",
            "Carry Compass",
            "Holds slow macro positions through noise",
            "Low-turnover positioning that leans on the prevailing trend with wide stops and modest size.",
            "Carry / Macro",
            StrategyParams::new(0.8, 0.4, 0.2, 0.025, 0.6),
        ),
        Agent::new(
            "regime-blender",
            "Regime Blender",
            "Balances trend, reversion and breakout views",
            "Blends every signal family so no single regime dominates the pod's drawdown profile.",
            "Multi-Strategy Blend",
            StrategyParams::new(0.9, 0.8, 0.6, 0.018, 0.75),
        ),
    ]
}

// -----------------------------------------------------------------------------
//  Unit tests: roster invariants
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn roster_ids_are_unique_and_stable() {
        let ids: Vec<&str> = roster().iter().map(|a| a.id.as_str()).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.len() >= 4);
        // Same static slice on every call.
        assert!(std::ptr::eq(roster(), roster()));
    }

    #[test]
    fn archetypes_are_distinct() {
        let labels: HashSet<&str> = roster().iter().map(|a| a.archetype_label.as_str()).collect();
        assert_eq!(labels.len(), roster().len());
    }

    #[test]
    fn with_params_copies_without_touching_the_roster() {
        let original = find_agent("trend-sentinel").unwrap();
        let before = original.params;
        let tuned = original.with_params(StrategyParams::new(0.0, 0.0, 0.0, 0.05, 0.1));
        assert_eq!(tuned.id, original.id);
        assert_ne!(tuned.params, before);
        assert_eq!(find_agent("trend-sentinel").unwrap().params, before);
    }

    #[test]
    fn weak_signals_fall_in_the_deadband() {
        let params = StrategyParams::new(1.0, 0.0, 0.0, 0.01, 1.0);
        let weak = SignalFeatures {
            trend: 0.01,
            ..SignalFeatures::default()
        };
        let strong = SignalFeatures {
            trend: -0.8,
            ..SignalFeatures::default()
        };
        assert_eq!(params.signal(&weak), 0.0);
        let s = params.signal(&strong);
        assert!(s < -0.5 && s > -1.0);
    }

    #[test]
    fn unknown_agent_is_none() {
        assert!(find_agent("nobody").is_none());
    }
}
