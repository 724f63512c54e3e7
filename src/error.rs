//! Error types for the simulation core.

use crate::solver::SolverError;

/// Errors surfaced by a simulation run.
///
/// Configuration problems are rejected before any integration begins;
/// solver failures carry no partial trajectory.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The configuration is structurally invalid (non-finite constant,
    /// empty time span, degenerate sample grid).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The numerical solver could not satisfy its tolerance.
    #[error("integration failed: {0}")]
    Integration(#[from] SolverError),
}
