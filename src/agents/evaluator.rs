// src/agents/evaluator.rs

//! Walks one agent through the shared price path.
//!
//! Decisions are taken on the close of day `t` and earn the move from `t` to
//! `t + 1`. Each trade is one contiguous run of exposure on one side; its
//! outcome is everything it earned and paid, costs included.

use super::agent_trait::{MarketView, SignalModel};
use super::config::{
    LIQUIDATION_FLOOR_FRACTION, MAX_GROSS_LEVERAGE, MIN_WORST_CASE_MOVE, STOP_COOLDOWN_DAYS,
    WORST_CASE_SIGMAS,
};
use super::features::SignalFeatures;
use crate::pairs::PairProfile;
use crate::simulators::path::max_daily_move;
use crate::types::{EquityPoint, PricePoint, Side, SimulationOptions};
use tracing::debug;

/// Raw output of one run, before metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub equity_curve: Vec<EquityPoint>,
    /// P&L of every closed trade, in close order.
    pub trade_outcomes: Vec<f64>,
    /// Set when equity hit the floor and trading stopped.
    pub liquidated: bool,
}

#[derive(Debug, Clone, Copy)]
struct OpenTrade {
    side: Side,
    entry_price: f64,
    pnl: f64,
}

/// Account state of one agent during a run.
struct Account {
    equity: f64,
    floor: f64,
    /// Signed notional carried into the next day.
    exposure: f64,
    trade: Option<OpenTrade>,
    outcomes: Vec<f64>,
    cooldown: usize,
    liquidated: bool,
}

impl Account {
    fn new(options: &SimulationOptions) -> Self {
        Self {
            equity: options.base_capital,
            floor: options.base_capital * LIQUIDATION_FLOOR_FRACTION,
            exposure: 0.0,
            trade: None,
            outcomes: Vec::new(),
            cooldown: 0,
            liquidated: false,
        }
    }

    fn book(&mut self, pnl: f64) {
        self.equity += pnl;
        if let Some(trade) = self.trade.as_mut() {
            trade.pnl += pnl;
        }
    }

    fn close_trade(&mut self) {
        if let Some(trade) = self.trade.take() {
            self.outcomes.push(trade.pnl);
        }
    }

    /// Moves exposure to `target`, paying half the spread on the traded notional.
    fn rebalance(&mut self, target: f64, price: f64, half_spread: f64) {
        let next_side = Side::from_signal(target);
        let current_side = self.trade.map(|t| t.side);

        if current_side.is_some() && current_side != next_side {
            self.book(-self.exposure.abs() * half_spread);
            self.exposure = 0.0;
            self.close_trade();
        }
        if let Some(side) = next_side {
            if self.trade.is_none() {
                self.trade = Some(OpenTrade {
                    side,
                    entry_price: price,
                    pnl: 0.0,
                });
            }
            self.book(-(target - self.exposure).abs() * half_spread);
            self.exposure = target;
        }
    }

    fn stopped_out(&self, price: f64, stop_distance: f64) -> bool {
        self.trade.is_some_and(|trade| {
            let excursion = trade.side.sign() * (price / trade.entry_price - 1.0);
            excursion <= -stop_distance
        })
    }

    /// Clamps to the floor and freezes the account once equity is gone.
    fn check_liquidation(&mut self, day: usize) {
        if self.equity > self.floor {
            return;
        }
        debug!(day, equity = self.equity, "equity hit liquidation floor, trading frozen");
        self.equity = self.floor;
        self.exposure = 0.0;
        self.close_trade();
        self.liquidated = true;
    }
}

/// Largest fractional loss one day can inflict on a position opened at
/// `price`: the hardest move the path can make plus a round trip of spread.
fn reachable_move(profile: &PairProfile, price: f64) -> f64 {
    max_daily_move(profile) / price + profile.relative_spread(price)
}

/// Signed notional the agent wants to hold overnight.
///
/// `move_bound` is the hard one-day bound for the pair at today's price.
fn target_exposure<M: SignalModel>(
    model: &M,
    features: &SignalFeatures,
    equity: f64,
    move_bound: f64,
    options: &SimulationOptions,
) -> f64 {
    let signal = model.signal(features);
    if signal == 0.0 {
        return 0.0;
    }
    let desired = options.base_capital * options.risk_multiplier * model.base_sizing() * signal.abs();

    // A worst-case day must not cost more than the drawdown target.
    let worst_case_move = (WORST_CASE_SIGMAS * features.daily_vol)
        .max(model.stop_distance())
        .max(MIN_WORST_CASE_MOVE)
        .max(move_bound);
    let risk_cap = options.drawdown_target * equity / worst_case_move;
    let leverage_cap = MAX_GROSS_LEVERAGE * equity;

    signal.signum() * desired.min(risk_cap).min(leverage_cap)
}

/// Runs `model` over `path`. The curve has one point per price and starts at `baseCapital`.
pub fn evaluate<M: SignalModel>(
    model: &M,
    profile: &PairProfile,
    path: &[PricePoint],
    options: &SimulationOptions,
) -> Evaluation {
    let mut account = Account::new(options);
    let mut equity_curve = Vec::with_capacity(path.len());

    for (day, point) in path.iter().enumerate() {
        if day > 0 && !account.liquidated {
            let prev = path[day - 1].price;
            account.book(account.exposure * (point.price / prev - 1.0));
            account.check_liquidation(day);
        }

        if !account.liquidated {
            let half_spread = 0.5 * profile.relative_spread(point.price);
            let last_day = day + 1 == path.len();

            if account.stopped_out(point.price, model.stop_distance()) {
                account.rebalance(0.0, point.price, half_spread);
                account.cooldown = STOP_COOLDOWN_DAYS;
            } else if last_day {
                account.rebalance(0.0, point.price, half_spread);
            } else if account.cooldown > 0 {
                account.cooldown -= 1;
            } else {
                let view = MarketView::new(path, day);
                let bound = reachable_move(profile, point.price);
                let target = SignalFeatures::from_view(&view)
                    .map(|features| {
                        target_exposure(model, &features, account.equity, bound, options)
                    })
                    .unwrap_or(0.0);
                account.rebalance(target, point.price, half_spread);
            }
            account.check_liquidation(day);
        }

        equity_curve.push(EquityPoint {
            index: point.index,
            label: point.label.clone(),
            equity: account.equity,
        });
    }

    Evaluation {
        equity_curve,
        trade_outcomes: account.outcomes,
        liquidated: account.liquidated,
    }
}
