// src/simulators/mod.rs

pub mod market_trait;
pub mod path;
pub mod regime;
