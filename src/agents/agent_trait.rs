// src/agents/agent_trait.rs

use super::features::SignalFeatures;
use crate::types::PricePoint;

/// A read-only window onto the shared price path, as of the close of `day`.
/// Agents never see prices after `day`.
#[derive(Debug, Clone, Copy)]
pub struct MarketView<'a> {
    path: &'a [PricePoint],
    day: usize,
}

impl<'a> MarketView<'a> {
    pub fn new(path: &'a [PricePoint], day: usize) -> Self {
        debug_assert!(day < path.len());
        Self { path, day }
    }

    /// The last `days + 1` closes ending at today, or `None` during warm-up.
    pub fn trailing_prices(&self, days: usize) -> Option<Vec<f64>> {
        if self.day < days {
            return None;
        }
        Some(
            self.path[self.day - days..=self.day]
                .iter()
                .map(|p| p.price)
                .collect(),
        )
    }
}

/// The core trait behind every roster agent: turn what the market looks
/// like today into a position for tomorrow.
pub trait SignalModel {
    /// Desired direction and conviction, in `[-1, 1]`. Zero means flat.
    fn signal(&self, features: &SignalFeatures) -> f64;

    /// Adverse close-to-close move from entry, as a fraction, that stops a trade out.
    fn stop_distance(&self) -> f64;

    /// Agent-specific share of `baseCapital * riskMultiplier` put at work at full conviction.
    fn base_sizing(&self) -> f64;
}
