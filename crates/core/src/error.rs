//! Error taxonomy for the simulation core.
//!
//! Only invalid configuration is an error. Runtime degeneracies (tiny
//! viewports, missing size reports) degrade visuals instead of failing.

use thiserror::Error;

/// Errors raised while building dancers or the pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DanceError {
    /// A dancer was described with out-of-range physical or visual constants.
    #[error("invalid dancer: {0}")]
    InvalidDancer(&'static str),
    /// Simulation tuning constants are out of range.
    #[error("invalid tuning: {0}")]
    InvalidTuning(&'static str),
}
