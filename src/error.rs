// src/error.rs

use thiserror::Error;

/// Everything that can go wrong when calling into the engine.
///
/// The engine does no I/O, so the only failures are caller inputs that are
/// out of range. Numeric degeneracies inside a run are never errors, they
/// map to the fallback values documented on [`crate::Metrics`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown forex pair: {0}")]
    UnknownPair(String),
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the rejected field, if this is a validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::UnknownPair(_) => None,
        }
    }
}

pub type EngineResult<T> = std::result::Result<T, SimulationError>;

/// Fails fast on a zero trading-day count.
pub(crate) fn validate_length(length: usize) -> EngineResult<()> {
    if length == 0 {
        return Err(SimulationError::invalid("length", "must be at least one trading day"));
    }
    Ok(())
}

pub(crate) fn validate_iterations(iterations: usize) -> EngineResult<()> {
    if iterations == 0 {
        return Err(SimulationError::invalid("iterations", "must be at least one"));
    }
    Ok(())
}
