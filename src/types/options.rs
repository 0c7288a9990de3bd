// src/types/options.rs

use crate::error::{EngineResult, SimulationError};
use serde::{Deserialize, Serialize};

/// Capital and risk budget shared read-only by every agent in one call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOptions {
    /// Starting equity of every agent.
    pub base_capital: f64,
    /// Global scale applied on top of each agent's own sizing.
    pub risk_multiplier: f64,
    /// Largest fraction of equity a single day is sized to lose, in `(0, 1)`.
    pub drawdown_target: f64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            base_capital: 150_000.0,
            risk_multiplier: 1.1,
            drawdown_target: 0.1,
        }
    }
}

impl SimulationOptions {
    pub fn new(base_capital: f64, risk_multiplier: f64, drawdown_target: f64) -> Self {
        Self {
            base_capital,
            risk_multiplier,
            drawdown_target,
        }
    }

    /// Rejects out-of-range values. Nothing is clamped.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.base_capital.is_finite() || self.base_capital <= 0.0 {
            return Err(SimulationError::invalid(
                "baseCapital",
                format!("must be a positive number, got {}", self.base_capital),
            ));
        }
        if !self.risk_multiplier.is_finite() || self.risk_multiplier <= 0.0 {
            return Err(SimulationError::invalid(
                "riskMultiplier",
                format!("must be a positive number, got {}", self.risk_multiplier),
            ));
        }
        if !(self.drawdown_target > 0.0 && self.drawdown_target < 1.0) {
            return Err(SimulationError::invalid(
                "drawdownTarget",
                format!("must lie in (0, 1), got {}", self.drawdown_target),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_defaults_are_valid() {
        assert!(SimulationOptions::default().validate().is_ok());
    }

    #[test]
    fn each_bad_field_is_named() {
        let cases = [
            (SimulationOptions::new(0.0, 1.0, 0.1), "baseCapital"),
            (SimulationOptions::new(-5.0, 1.0, 0.1), "baseCapital"),
            (SimulationOptions::new(f64::NAN, 1.0, 0.1), "baseCapital"),
            (SimulationOptions::new(1e5, 0.0, 0.1), "riskMultiplier"),
            (SimulationOptions::new(1e5, f64::INFINITY, 0.1), "riskMultiplier"),
            (SimulationOptions::new(1e5, 1.0, 0.0), "drawdownTarget"),
            (SimulationOptions::new(1e5, 1.0, 1.0), "drawdownTarget"),
            (SimulationOptions::new(1e5, 1.0, f64::NAN), "drawdownTarget"),
        ];
        for (options, field) in cases {
            let err = options.validate().unwrap_err();
            assert_eq!(err.field(), Some(field), "options: {:?}", options);
        }
    }

    #[test]
    fn deserializes_from_camel_case() {
        let json = r#"{"baseCapital":150000,"riskMultiplier":1.1,"drawdownTarget":0.1}"#;
        let options: SimulationOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options, SimulationOptions::default());
    }
}
