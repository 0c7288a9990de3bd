// src/simulators/regime.rs

//! Latent market states driving drift and volatility of the synthetic path.

use crate::rng::ScenarioRng;

/// Daily probability of leaving the current regime.
pub const REGIME_SWITCH_PROB: f64 = 0.03;
/// Size of the one-off gap on a regime switch, in daily sigmas.
pub const REGIME_SHOCK_SIGMAS: f64 = 1.5;
/// Every gaussian draw of the path is clamped to this many standard deviations.
pub const SHOCK_TRUNCATION_SIGMAS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Regime {
    TrendingUp,
    TrendingDown,
    #[default]
    Choppy,
    Compression,
}

impl Regime {
    pub const ALL: [Regime; 4] = [
        Regime::TrendingUp,
        Regime::TrendingDown,
        Regime::Choppy,
        Regime::Compression,
    ];

    /// Expected daily move in units of the pair's daily sigma.
    pub fn drift_sigmas(self) -> f64 {
        match self {
            Regime::TrendingUp => 0.12,
            Regime::TrendingDown => -0.12,
            Regime::Choppy | Regime::Compression => 0.0,
        }
    }

    /// Multiplier on the pair's daily sigma.
    pub fn vol_scale(self) -> f64 {
        match self {
            Regime::TrendingUp | Regime::TrendingDown => 1.0,
            Regime::Choppy => 1.25,
            Regime::Compression => 0.5,
        }
    }

    /// Largest absolute one-day move any regime can produce, switch gap
    /// included, in units of the pair's daily sigma.
    pub fn max_move_sigmas() -> f64 {
        let diffusion = Self::ALL
            .iter()
            .map(|r| r.drift_sigmas().abs() + r.vol_scale() * SHOCK_TRUNCATION_SIGMAS)
            .fold(0.0, f64::max);
        diffusion + REGIME_SHOCK_SIGMAS * SHOCK_TRUNCATION_SIGMAS
    }

    /// Uniformly random starting regime.
    pub fn draw(rng: &mut ScenarioRng) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }

    /// One day of the regime chain. Returns the new regime and whether it changed.
    pub fn transition(self, rng: &mut ScenarioRng) -> (Self, bool) {
        if !rng.chance(REGIME_SWITCH_PROB) {
            return (self, false);
        }
        let current = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        let offset = 1 + rng.next_index(Self::ALL.len() - 1);
        (Self::ALL[(current + offset) % Self::ALL.len()], true)
    }
}
