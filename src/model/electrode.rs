//! Electrode stimulus schedule.
//!
//! The electrode drives mediator oxidation during a single rectangular pulse
//! window. The contract is "given time, return drive level", so the schedule
//! can later become periodic without touching the reaction model.
//!
//! TODO: periodic square-wave schedule for repeated flash patterns.

use crate::config::RateParameters;

/// Single rectangular drive pulse.
///
/// The window is closed on both ends: the instants `t_on_sec` and
/// `t_off_sec` are both ON. Trajectories are only reproducible bit-for-bit
/// if this tie-break is preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectrodePulse {
    /// Pulse start (s)
    pub t_on_sec: f64,
    /// Pulse end (s)
    pub t_off_sec: f64,
}

impl Default for ElectrodePulse {
    fn default() -> Self {
        Self {
            t_on_sec: 20.0,
            t_off_sec: 40.0,
        }
    }
}

impl ElectrodePulse {
    /// Drive level at time `t_sec`.
    ///
    /// Total over the real line, including times outside the simulated
    /// interval. No side effects.
    pub fn drive(&self, t_sec: f64, rates: &RateParameters) -> f64 {
        if self.t_on_sec <= t_sec && t_sec <= self.t_off_sec {
            rates.k_elec_on
        } else {
            rates.k_elec_off
        }
    }
}
