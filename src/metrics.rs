// src/metrics.rs

//! Performance statistics of one equity curve.
//!
//! Every function here returns a finite number for every input the evaluator
//! can produce: zero-variance curves, runs without trades and liquidated runs
//! each have a defined fallback.

use crate::types::{EquityPoint, Metrics};
use statrs::statistics::Statistics;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
/// Profit factor reported when no trade lost money. Also the upper cap.
pub const PROFIT_FACTOR_CAP: f64 = 999.0;
/// Annualized return reported when compounding overflows.
pub const ANNUALIZED_RETURN_CAP: f64 = 1e6;
/// Added to drawdown before dividing so flat curves do not divide by zero.
pub const DRAWDOWN_FLOOR: f64 = 0.02;
/// Weight of Sharpe next to annualized return in the risk score.
pub const SHARPE_BLEND: f64 = 0.05;

const MIN_STD: f64 = 1e-12;

#[inline]
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// `(last / first)^(252 / n) - 1`, with `n` the number of points.
pub fn annualized_return(equity: &[f64]) -> f64 {
    let (Some(&first), Some(&last)) = (equity.first(), equity.last()) else {
        return 0.0;
    };
    let growth = last / first;
    if !(growth > 0.0) || !growth.is_finite() {
        return 0.0;
    }
    let value = growth.powf(TRADING_DAYS_PER_YEAR / equity.len() as f64) - 1.0;
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, ANNUALIZED_RETURN_CAP)
    }
}

/// Largest fall from a running peak, as a fraction of that peak.
pub fn max_drawdown(equity: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst: f64 = 0.0;
    for &value in equity {
        peak = peak.max(value);
        if peak > 0.0 {
            worst = worst.max((peak - value) / peak);
        }
    }
    finite_or(worst, 1.0).clamp(0.0, 1.0)
}

pub fn daily_returns(equity: &[f64]) -> Vec<f64> {
    equity.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Annualized mean over population standard deviation of daily returns.
/// Zero when the curve has no dispersion.
pub fn sharpe_ratio(equity: &[f64]) -> f64 {
    let returns = daily_returns(equity);
    if returns.is_empty() {
        return 0.0;
    }
    let std = returns.iter().population_std_dev();
    if !(std > MIN_STD) {
        return 0.0;
    }
    let mean = returns.iter().mean();
    finite_or(mean / std * TRADING_DAYS_PER_YEAR.sqrt(), 0.0)
}

pub fn win_rate(outcomes: &[f64]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    outcomes.iter().filter(|&&pnl| pnl > 0.0).count() as f64 / outcomes.len() as f64
}

/// Gross wins over gross losses.
pub fn profit_factor(outcomes: &[f64]) -> f64 {
    let wins: f64 = outcomes.iter().filter(|&&pnl| pnl > 0.0).sum();
    let losses: f64 = outcomes.iter().filter(|&&pnl| pnl < 0.0).map(|pnl| pnl.abs()).sum();
    if !(wins > 0.0) {
        return 0.0;
    }
    if !(losses > 0.0) {
        return PROFIT_FACTOR_CAP;
    }
    finite_or(wins / losses, PROFIT_FACTOR_CAP).min(PROFIT_FACTOR_CAP)
}

/// Return and Sharpe per unit of drawdown.
///
/// Increasing in both return and Sharpe and never increasing in drawdown:
/// a positive edge is divided by the (floored) drawdown, a negative edge is
/// scaled up by it.
pub fn risk_score(annualized_return: f64, max_drawdown: f64, sharpe: f64) -> f64 {
    let edge = annualized_return + SHARPE_BLEND * sharpe;
    let pain = max_drawdown + DRAWDOWN_FLOOR;
    let score = if edge >= 0.0 {
        edge / pain
    } else {
        edge * pain / DRAWDOWN_FLOOR
    };
    finite_or(score, 0.0)
}

/// All six summary metrics of one run.
pub fn compute_metrics(equity_curve: &[EquityPoint], trade_outcomes: &[f64]) -> Metrics {
    let equity: Vec<f64> = equity_curve.iter().map(|p| p.equity).collect();

    let annualized_return = annualized_return(&equity);
    let max_drawdown = max_drawdown(&equity);
    let sharpe = sharpe_ratio(&equity);

    Metrics {
        annualized_return,
        max_drawdown,
        sharpe,
        win_rate: win_rate(trade_outcomes),
        profit_factor: profit_factor(trade_outcomes),
        risk_score: risk_score(annualized_return, max_drawdown, sharpe),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(values: &[f64]) -> Vec<EquityPoint> {
        values
            .iter()
            .enumerate()
            .map(|(index, &equity)| EquityPoint {
                index,
                label: index.to_string(),
                equity,
            })
            .collect()
    }

    #[test]
    fn flat_curve_without_trades_is_all_zero() {
        let m = compute_metrics(&curve(&[100.0; 50]), &[]);
        assert_eq!(m.annualized_return, 0.0);
        assert_eq!(m.max_drawdown, 0.0);
        assert_eq!(m.sharpe, 0.0);
        assert_eq!(m.win_rate, 0.0);
        assert_eq!(m.profit_factor, 0.0);
        assert_eq!(m.risk_score, 0.0);
    }

    #[test]
    fn annualized_return_compounds_over_252_days() {
        let mut values = vec![100.0; 252];
        values[251] = 110.0;
        assert!((annualized_return(&values) - 0.10).abs() < 1e-12);

        let half_year = [100.0, 105.0].repeat(63);
        // 126 points ending at 105: (1.05)^2 - 1
        assert!((annualized_return(&half_year) - 0.1025).abs() < 1e-12);
    }

    #[test]
    fn annualized_return_stays_finite_on_extreme_short_runs() {
        let boom = annualized_return(&[1.0, 1_000.0]);
        assert_eq!(boom, ANNUALIZED_RETURN_CAP);
        let bust = annualized_return(&[100_000.0, 10.0]);
        assert!(bust.is_finite() && bust >= -1.0);
        assert_eq!(annualized_return(&[5.0]), 0.0);
        assert_eq!(annualized_return(&[]), 0.0);
    }

    #[test]
    fn drawdown_tracks_the_running_peak() {
        let values = [100.0, 120.0, 90.0, 130.0, 117.0];
        assert!((max_drawdown(&values) - 0.25).abs() < 1e-12);
        assert_eq!(max_drawdown(&[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn liquidated_curve_has_bounded_drawdown_and_finite_metrics() {
        let mut values = vec![150_000.0; 10];
        values.extend(vec![15.0; 40]);
        let m = compute_metrics(&curve(&values), &[-149_985.0]);
        assert!(m.is_finite());
        assert!(m.max_drawdown <= 1.0 && m.max_drawdown > 0.99);
        assert_eq!(m.win_rate, 0.0);
        assert_eq!(m.profit_factor, 0.0);
        assert!(m.risk_score < 0.0);
    }

    #[test]
    fn sharpe_is_zero_without_variance() {
        // Constant 1% growth: returns identical, std is zero.
        let values: Vec<f64> = (0..30).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
        assert_eq!(sharpe_ratio(&values), 0.0);
        assert_eq!(sharpe_ratio(&[100.0]), 0.0);
        assert_eq!(sharpe_ratio(&[100.0, 101.0]), 0.0);
    }

    #[test]
    fn sharpe_sign_follows_the_drift() {
        let up = [100.0, 101.0, 100.5, 102.0, 101.8, 103.0];
        let down = [100.0, 99.0, 99.5, 98.0, 98.2, 97.0];
        assert!(sharpe_ratio(&up) > 0.0);
        assert!(sharpe_ratio(&down) < 0.0);
    }

    #[test]
    fn win_rate_and_profit_factor() {
        let outcomes = [100.0, -50.0, 25.0, -25.0];
        assert_eq!(win_rate(&outcomes), 0.5);
        assert!((profit_factor(&outcomes) - 125.0 / 75.0).abs() < 1e-12);
    }

    #[test]
    fn profit_factor_sentinels() {
        assert_eq!(profit_factor(&[10.0, 5.0]), PROFIT_FACTOR_CAP);
        assert_eq!(profit_factor(&[-10.0, -5.0]), 0.0);
        assert_eq!(profit_factor(&[]), 0.0);
        assert_eq!(profit_factor(&[1e9, -1e-9]), PROFIT_FACTOR_CAP);
        assert_eq!(win_rate(&[0.0]), 0.0);
    }

    #[test]
    fn risk_score_orders_sensibly() {
        // More return is better.
        assert!(risk_score(0.2, 0.1, 1.0) > risk_score(0.1, 0.1, 1.0));
        assert!(risk_score(-0.1, 0.1, 0.0) > risk_score(-0.2, 0.1, 0.0));
        // More Sharpe is better, also when losing.
        assert!(risk_score(0.1, 0.1, 2.0) > risk_score(0.1, 0.1, 1.0));
        assert!(risk_score(-0.3, 0.1, 1.0) > risk_score(-0.3, 0.1, -1.0));
        // More drawdown is worse on both sides of zero.
        assert!(risk_score(0.1, 0.05, 1.0) > risk_score(0.1, 0.3, 1.0));
        assert!(risk_score(-0.1, 0.05, -1.0) > risk_score(-0.1, 0.3, -1.0));
        assert!(risk_score(ANNUALIZED_RETURN_CAP, 0.0, 1e3).is_finite());
    }
}
