// src/simulators/market_trait.rs

use super::regime::Regime;

/// A trait for any object that can simulate a daily price series.
/// The path builder only talks to simulators through this trait.
pub trait Marketable {
    /// Advances the simulation by one trading day and returns the new price.
    fn step(&mut self) -> f64;

    /// Returns the current price without advancing the simulation.
    fn current_price(&self) -> f64;

    /// Latent state that produced the most recent move.
    fn regime(&self) -> Regime;
}
