// src/pairs/mod.rs

pub mod definitions;

pub use definitions::{ForexPair, PairProfile};
