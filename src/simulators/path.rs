// src/simulators/path.rs

use super::market_trait::Marketable;
use super::regime::{REGIME_SHOCK_SIGMAS, Regime, SHOCK_TRUNCATION_SIGMAS};
use crate::pairs::{ForexPair, PairProfile};
use crate::rng::ScenarioRng;
use crate::types::PricePoint;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Prices never fall below this fraction of the starting level.
pub const PRICE_FLOOR_FRACTION: f64 = 0.05;

/// Day zero of every label sequence (a Monday).
const LABEL_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("label epoch is a valid date"),
};

/// Additive regime-switching random walk in the pair's pip convention.
pub struct RegimeSwitchingSimulator {
    profile: PairProfile,
    current_price: f64,
    regime: Regime,
    rng: ScenarioRng,
}

impl RegimeSwitchingSimulator {
    pub fn new(pair: ForexPair, seed: &str) -> Self {
        let profile = pair.profile();
        let mut rng = ScenarioRng::derive(seed, &["path"]);
        let regime = Regime::draw(&mut rng);
        Self {
            profile,
            current_price: profile.initial_price,
            regime,
            rng,
        }
    }

    fn floor(&self) -> f64 {
        self.profile.initial_price * PRICE_FLOOR_FRACTION
    }

    fn bounded_shock(&mut self) -> f64 {
        self.rng
            .next_gaussian()
            .clamp(-SHOCK_TRUNCATION_SIGMAS, SHOCK_TRUNCATION_SIGMAS)
    }
}

/// Hard bound on one day's price change for `profile`, in price units.
pub fn max_daily_move(profile: &PairProfile) -> f64 {
    profile.daily_vol() * Regime::max_move_sigmas()
}

impl Marketable for RegimeSwitchingSimulator {
    fn step(&mut self) -> f64 {
        let (regime, switched) = self.regime.transition(&mut self.rng);
        self.regime = regime;

        let sigma = self.profile.daily_vol();
        let shock = self.bounded_shock();
        let mut delta = regime.drift_sigmas() * sigma + regime.vol_scale() * sigma * shock;
        if switched {
            delta += REGIME_SHOCK_SIGMAS * sigma * self.bounded_shock();
        }

        self.current_price = (self.current_price + delta).max(self.floor());
        self.current_price
    }

    fn current_price(&self) -> f64 {
        self.current_price
    }

    fn regime(&self) -> Regime {
        self.regime
    }
}

fn next_business_day(date: NaiveDate) -> NaiveDate {
    let step = match date.weekday() {
        Weekday::Fri => 3,
        Weekday::Sat => 2,
        _ => 1,
    };
    date + Days::new(step)
}

/// Walks `simulator` for `length` days; point 0 is its current price.
pub fn collect_path<M: Marketable>(simulator: &mut M, length: usize) -> Vec<PricePoint> {
    let mut path = Vec::with_capacity(length);
    let mut date = LABEL_EPOCH;
    for index in 0..length {
        if index > 0 {
            simulator.step();
            date = next_business_day(date);
        }
        path.push(PricePoint {
            index,
            label: date.format("%Y-%m-%d").to_string(),
            price: simulator.current_price(),
            regime: simulator.regime(),
        });
    }
    path
}

/// The single shared path of one simulation call.
pub fn build_price_path(pair: ForexPair, length: usize, seed: &str) -> Vec<PricePoint> {
    let mut simulator = RegimeSwitchingSimulator::new(pair, seed);
    collect_path(&mut simulator, length)
}
