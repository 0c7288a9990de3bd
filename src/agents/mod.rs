// src/agents/mod.rs

pub mod agent_trait;
pub mod config;
pub mod evaluator;
pub mod features;
pub mod roster;
