// src/agents/config.rs

//! A centralized place for tuning the strategy evaluator and optimizer.

// --- Signal ---
// Every feature looks back over the same window; nothing trades before it fills.
pub const LOOKBACK_DAYS: usize = 20;
pub const SHORT_VOL_DAYS: usize = 5;
// Signals weaker than this are treated as flat.
pub const SIGNAL_DEADBAND: f64 = 0.05;
// Below this the window is considered to have no dispersion at all.
pub const MIN_DISPERSION: f64 = 1e-12;

// --- Sizing ---
// The worst plausible one-day move used to bound exposure against the drawdown target.
pub const WORST_CASE_SIGMAS: f64 = 6.0;
pub const MIN_WORST_CASE_MOVE: f64 = 0.01;
pub const MAX_GROSS_LEVERAGE: f64 = 5.0;

// --- Stops & liquidation ---
pub const STOP_COOLDOWN_DAYS: usize = 3;
// Equity is never allowed below this fraction of base capital; reaching it ends the run.
pub const LIQUIDATION_FLOOR_FRACTION: f64 = 1e-4;

// --- Optimizer ---
// Relative size of one jitter step, in gaussian sigmas.
pub const OPTIMIZER_JITTER: f64 = 0.25;
// Weights jitter on at least this scale so a zero weight can still move.
pub const MIN_WEIGHT_JITTER_SCALE: f64 = 0.25;
pub const WEIGHT_BOUNDS: (f64, f64) = (0.0, 3.0);
pub const STOP_DISTANCE_BOUNDS: (f64, f64) = (0.002, 0.08);
pub const BASE_SIZING_BOUNDS: (f64, f64) = (0.05, 2.0);
