// src/pairs/definitions.rs
//! Core currency-pair metadata used by the price path generator.
//
//! The tradable universe is fixed. Each pair carries the constants that
//! scale a synthetic path into that pair's quoting convention.

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five majors the engine can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ForexPair {
    EurUsd,
    GbpUsd,
    UsdJpy,
    AudUsd,
    UsdCad,
}

/// Immutable market facts about a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairProfile {
    /// Nominal level at day zero of every path.
    pub initial_price: f64,
    /// Size of one pip in price units (1e-2 for JPY crosses, 1e-4 otherwise).
    pub pip_size: f64,
    /// Typical one-day move, in pips.
    pub daily_vol_pips: f64,
    /// Round-trip spread, in pips.
    pub spread_pips: f64,
}

impl PairProfile {
    #[inline]
    pub const fn new(initial_price: f64, pip_size: f64, daily_vol_pips: f64, spread_pips: f64) -> Self {
        Self {
            initial_price,
            pip_size,
            daily_vol_pips,
            spread_pips,
        }
    }

    /// One-day standard deviation in price units.
    #[inline]
    pub fn daily_vol(&self) -> f64 {
        self.daily_vol_pips * self.pip_size
    }

    /// Spread as a fraction of `price`.
    #[inline]
    pub fn relative_spread(&self, price: f64) -> f64 {
        self.spread_pips * self.pip_size / price
    }
}

impl ForexPair {
    /// Every supported pair, in display order.
    pub const ALL: [ForexPair; 5] = [
        ForexPair::EurUsd,
        ForexPair::GbpUsd,
        ForexPair::UsdJpy,
        ForexPair::AudUsd,
        ForexPair::UsdCad,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ForexPair::EurUsd => "EURUSD",
            ForexPair::GbpUsd => "GBPUSD",
            ForexPair::UsdJpy => "USDJPY",
            ForexPair::AudUsd => "AUDUSD",
            ForexPair::UsdCad => "USDCAD",
        }
    }

    pub fn profile(self) -> PairProfile {
        match self {
            ForexPair::EurUsd => PairProfile::new(1.1000, 1e-4, 55.0, 0.6),
            ForexPair::GbpUsd => PairProfile::new(1.2700, 1e-4, 72.0, 0.9),
            ForexPair::UsdJpy => PairProfile::new(148.00, 1e-2, 68.0, 0.8),
            ForexPair::AudUsd => PairProfile::new(0.6600, 1e-4, 48.0, 0.8),
            ForexPair::UsdCad => PairProfile::new(1.3500, 1e-4, 50.0, 1.0),
        }
    }
}

impl fmt::Display for ForexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ForexPair {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ForexPair::ALL
            .into_iter()
            .find(|pair| pair.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimulationError::UnknownPair(s.to_string()))
    }
}

// -----------------------------------------------------------------------------
//  Unit tests: pair catalog invariants
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_from_str() {
        for pair in ForexPair::ALL {
            assert_eq!(pair.symbol().parse::<ForexPair>().unwrap(), pair);
            assert_eq!(pair.to_string(), pair.symbol());
        }
        assert_eq!("usdjpy".parse::<ForexPair>().unwrap(), ForexPair::UsdJpy);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = "EURGBP".parse::<ForexPair>().unwrap_err();
        assert_eq!(err, SimulationError::UnknownPair("EURGBP".to_string()));
    }

    #[test]
    fn jpy_pair_uses_hundredth_pips() {
        let jpy = ForexPair::UsdJpy.profile();
        let eur = ForexPair::EurUsd.profile();
        assert_eq!(jpy.pip_size, 1e-2);
        assert_eq!(eur.pip_size, 1e-4);
        // Relative daily volatility should be of the same order for every major.
        let jpy_rel = jpy.daily_vol() / jpy.initial_price;
        let eur_rel = eur.daily_vol() / eur.initial_price;
        assert!(jpy_rel / eur_rel > 0.5 && jpy_rel / eur_rel < 2.0);
    }

    #[test]
    fn every_profile_is_positive() {
        for pair in ForexPair::ALL {
            let p = pair.profile();
            assert!(p.initial_price > 0.0);
            assert!(p.daily_vol() > 0.0);
            assert!(p.relative_spread(p.initial_price) > 0.0);
        }
    }

    #[test]
    fn serializes_as_upper_case_symbol() {
        let json = serde_json::to_string(&ForexPair::EurUsd).unwrap();
        assert_eq!(json, "\"EURUSD\"");
    }
}
