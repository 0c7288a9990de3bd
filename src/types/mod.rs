// src/types/mod.rs

pub mod options;
pub mod position;
pub mod result;
pub mod series;

pub use options::SimulationOptions;
pub use position::Side;
pub use result::{Metrics, SimulationResult};
pub use series::{EquityPoint, PricePoint};
