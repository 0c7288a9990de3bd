// src/agents/features.rs

use super::agent_trait::MarketView;
use super::config::{LOOKBACK_DAYS, MIN_DISPERSION, SHORT_VOL_DAYS};
use statrs::statistics::Statistics;

/// Normalized inputs every strategy draws its signal from.
/// Directional features are squashed into `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalFeatures {
    /// Lookback return relative to what noise alone would produce.
    pub trend: f64,
    /// Negated z-score of today's close against the lookback mean.
    pub mean_reversion: f64,
    /// Volatility expansion (positive) or compression (negative), signed by the short-term move.
    pub breakout: f64,
    /// Standard deviation of daily simple returns over the lookback.
    pub daily_vol: f64,
}

fn direction(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

impl SignalFeatures {
    /// `None` until a full lookback window is available.
    pub fn from_view(view: &MarketView) -> Option<Self> {
        let prices = view.trailing_prices(LOOKBACK_DAYS)?;
        Some(Self::from_window(&prices))
    }

    /// `prices` holds `LOOKBACK_DAYS + 1` closes, oldest first.
    fn from_window(prices: &[f64]) -> Self {
        let returns = simple_returns(prices);
        let last = prices[prices.len() - 1];

        let daily_vol = returns.iter().population_std_dev();
        let short_vol = returns[returns.len() - SHORT_VOL_DAYS..]
            .iter()
            .population_std_dev();

        if !(daily_vol > MIN_DISPERSION) {
            return Self::default();
        }

        let lookback_return = last / prices[0] - 1.0;
        let trend = (lookback_return / (daily_vol * (LOOKBACK_DAYS as f64).sqrt())).tanh();

        let mean = prices.iter().mean();
        let spread = prices.iter().population_std_dev();
        let mean_reversion = if spread > MIN_DISPERSION * mean {
            -((last - mean) / spread).tanh()
        } else {
            0.0
        };

        let short_return = last / prices[prices.len() - 1 - SHORT_VOL_DAYS] - 1.0;
        let breakout = (short_vol / daily_vol - 1.0).tanh() * direction(short_return);

        Self {
            trend,
            mean_reversion,
            breakout,
            daily_vol,
        }
    }
}
