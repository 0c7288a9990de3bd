// src/cache.rs

//! Caller-side memoization of whole result lists.
//!
//! The engine never caches. Callers that re-render on every parameter edit
//! can put a `ScenarioCache` in front of it; any change to the scenario
//! tuple is a different key, so stale optimizer output is never served for
//! edited parameters.
//!
//! The cache holds at most `capacity` result lists. Past that, the oldest
//! entry is evicted first.

use crate::error::EngineResult;
use crate::market::simulate_agents;
use crate::optimizer::optimize_agent_configs;
use crate::pairs::ForexPair;
use crate::types::{SimulationOptions, SimulationResult};
use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::trace;

/// Exact identity of one engine call. Floats are keyed by bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScenarioKey {
    pub pair: ForexPair,
    pub length: usize,
    pub seed: String,
    base_capital: u64,
    risk_multiplier: u64,
    drawdown_target: u64,
    /// `None` for a plain simulation, `Some(n)` for an optimizer run.
    pub iterations: Option<usize>,
}

impl ScenarioKey {
    pub fn new(
        pair: ForexPair,
        length: usize,
        seed: &str,
        options: &SimulationOptions,
        iterations: Option<usize>,
    ) -> Self {
        Self {
            pair,
            length,
            seed: seed.to_string(),
            base_capital: options.base_capital.to_bits(),
            risk_multiplier: options.risk_multiplier.to_bits(),
            drawdown_target: options.drawdown_target.to_bits(),
            iterations,
        }
    }
}

pub type SharedResults = Arc<Vec<SimulationResult>>;

/// Result lists kept when no capacity is given.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Default)]
struct Entries {
    map: HashMap<ScenarioKey, SharedResults>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<ScenarioKey>,
}

#[derive(Debug)]
pub struct ScenarioCache {
    entries: RwLock<Entries>,
    capacity: usize,
}

impl Default for ScenarioCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl ScenarioCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `capacity` result lists (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn get_or_compute<F>(&self, key: ScenarioKey, compute: F) -> EngineResult<SharedResults>
    where
        F: FnOnce() -> EngineResult<Vec<SimulationResult>>,
    {
        if let Some(hit) = self.entries.read().map.get(&key) {
            trace!(seed = %key.seed, "scenario cache hit");
            return Ok(Arc::clone(hit));
        }
        // Computed outside the lock; a racing writer produces the same value.
        let results = Arc::new(compute()?);

        let mut entries = self.entries.write();
        if !entries.map.contains_key(&key) {
            entries.order.push_back(key.clone());
            entries.map.insert(key, Arc::clone(&results));
            while entries.map.len() > self.capacity {
                let Some(oldest) = entries.order.pop_front() else {
                    break;
                };
                entries.map.remove(&oldest);
                trace!(seed = %oldest.seed, "scenario cache eviction");
            }
        }
        Ok(results)
    }

    /// Cached [`simulate_agents`].
    pub fn simulate(
        &self,
        pair: ForexPair,
        length: usize,
        seed: &str,
        options: &SimulationOptions,
    ) -> EngineResult<SharedResults> {
        let key = ScenarioKey::new(pair, length, seed, options, None);
        self.get_or_compute(key, || simulate_agents(pair, length, seed, options))
    }

    /// Cached [`optimize_agent_configs`].
    pub fn optimize(
        &self,
        pair: ForexPair,
        length: usize,
        seed: &str,
        options: &SimulationOptions,
        iterations: usize,
    ) -> EngineResult<SharedResults> {
        let key = ScenarioKey::new(pair, length, seed, options, Some(iterations));
        self.get_or_compute(key, || {
            optimize_agent_configs(pair, length, seed, options, iterations)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.read().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().map.is_empty()
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.map.clear();
        entries.order.clear();
    }
}
