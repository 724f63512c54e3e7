//! Adaptive ODE integration.
//!
//! Implements the Dormand-Prince 4(5) explicit Runge-Kutta pair with
//! embedded error estimation, FSAL reuse, and a continuous extension for
//! resampling the solution onto a caller-specified output grid.
//!
//! The method suits nonstiff, smoothly varying right-hand sides. A
//! piecewise-constant forcing term is tolerated through step rejection
//! alone; local error near a forcing discontinuity is looser than
//! elsewhere and no event detection is performed.
//!
//! Reference: Hairer, Norsett, Wanner. Solving Ordinary Differential
//! Equations I, 2nd ed., Springer 1993 (DOPRI5).

mod dopri;

pub use dopri::Dopri45;

/// Right-hand side of an ODE system `dy/dt = f(t, y)`.
pub trait OdeSystem {
    /// Number of state variables.
    fn ndim(&self) -> usize;

    /// Evaluate `f(t, y)` and write into `dydt`.
    ///
    /// Both slices have length `ndim()`. Implementations must be pure:
    /// the solver re-evaluates at multiple stage points per step.
    fn rhs(&self, t: f64, y: &[f64], dydt: &mut [f64]);
}

/// Configuration for the adaptive solver.
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Relative tolerance
    pub rtol: f64,
    /// Absolute tolerance
    pub atol: f64,
    /// Initial step size; 0.0 selects one automatically from the span
    pub h0: f64,
    /// Minimum step size before the solver gives up
    pub h_min: f64,
    /// Maximum step size
    pub h_max: f64,
    /// Maximum number of steps (accepted or rejected) per integration
    pub max_steps: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-3,
            atol: 1e-6,
            h0: 0.0,
            h_min: 1e-14,
            h_max: f64::INFINITY,
            max_steps: 100_000,
        }
    }
}

impl SolverOptions {
    pub(crate) fn validate(&self) -> Result<(), SolverError> {
        if !self.rtol.is_finite() || self.rtol <= 0.0 {
            return Err(SolverError::InvalidRequest("rtol must be finite and > 0".into()));
        }
        if !self.atol.is_finite() || self.atol <= 0.0 {
            return Err(SolverError::InvalidRequest("atol must be finite and > 0".into()));
        }
        if !(self.h_min >= 0.0) || !self.h_min.is_finite() {
            return Err(SolverError::InvalidRequest("h_min must be finite and >= 0".into()));
        }
        if !(self.h_max > self.h_min) {
            return Err(SolverError::InvalidRequest("h_max must exceed h_min".into()));
        }
        if self.max_steps == 0 {
            return Err(SolverError::InvalidRequest("max_steps must be > 0".into()));
        }
        Ok(())
    }

    pub(crate) fn initial_step(&self, span: f64) -> f64 {
        if self.h0 > 0.0 {
            self.h0.min(span)
        } else {
            (span * 1e-3).max(self.h_min).min(self.h_max).min(span)
        }
    }
}

/// Failure modes of an integration.
///
/// Any failure is total: the caller receives no partial trajectory.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// `y0` does not match the system dimension.
    #[error("state dimension mismatch: y0 has length {got}, system expects {expected}")]
    DimensionMismatch { got: usize, expected: usize },

    /// Malformed span, grid, or options.
    #[error("invalid integration request: {0}")]
    InvalidRequest(String),

    /// The local error cannot be met even at the minimum step size,
    /// typically a diverging or non-finite right-hand side.
    #[error("step size underflow at t = {t:.6e}")]
    StepSizeUnderflow { t: f64 },

    /// The step budget ran out before the end of the span.
    #[error("exceeded {max_steps} solver steps at t = {t:.6e}")]
    MaxStepsExceeded { max_steps: usize, t: f64 },
}
