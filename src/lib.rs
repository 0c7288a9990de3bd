// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod cache;
pub mod error;
pub mod market;
pub mod metrics;
pub mod optimizer;
pub mod pairs;
pub mod portfolio;
pub mod rng;
pub mod simulators;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `agents` ---
pub use agents::agent_trait::{MarketView, SignalModel};
pub use agents::evaluator::{Evaluation, evaluate};
pub use agents::features::SignalFeatures;
pub use agents::roster::{Agent, StrategyParams, find_agent, roster};

// --- From the engine entry points ---
pub use market::{Market, simulate_agents};
pub use optimizer::optimize_agent_configs;

// --- From `metrics` and `portfolio` ---
pub use metrics::compute_metrics;
pub use portfolio::{BlendedMetrics, DEFAULT_SEEDS, PodSummary, random_scenario_seed};

// --- From `simulators` ---
pub use simulators::market_trait::Marketable;
pub use simulators::path::{RegimeSwitchingSimulator, build_price_path};
pub use simulators::regime::Regime;

// --- Shared data and plumbing ---
pub use cache::{ScenarioCache, ScenarioKey};
pub use error::{EngineResult, SimulationError};
pub use pairs::{ForexPair, PairProfile};
pub use rng::ScenarioRng;
pub use types::{EquityPoint, Metrics, PricePoint, SimulationOptions, SimulationResult};
