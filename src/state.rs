//! State and trajectory types for the pixel simulation.

use serde::{Deserialize, Serialize};

/// Instantaneous state of one pixel: `(M, A, L)`.
///
/// `activation` is conceptually a fraction and stays within `[0, 1]` under
/// well-behaved parameters, but the model does not clamp it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelState {
    /// Mediator concentration (arbitrary units)
    pub mediator: f64,
    /// Regulator activation fraction
    pub activation: f64,
    /// Light-protein level (arbitrary units)
    pub light_protein: f64,
}

impl PixelState {
    /// Pack into the solver's state-vector layout.
    pub fn to_array(self) -> [f64; 3] {
        [self.mediator, self.activation, self.light_protein]
    }

    /// Unpack from the solver's state-vector layout.
    pub fn from_array(y: [f64; 3]) -> Self {
        Self {
            mediator: y[0],
            activation: y[1],
            light_protein: y[2],
        }
    }
}

/// Sampled solution of one simulation run.
///
/// Column layout: every column has `sample_count` entries, `time_sec` is
/// strictly increasing and evenly spaced over the simulated interval. The
/// light column is derived from `light_protein` by the emission scaling
/// factor and recomputed whenever a trajectory is produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    /// Sample times (s)
    pub time_sec: Vec<f64>,
    /// Mediator concentration per sample
    pub mediator: Vec<f64>,
    /// Regulator activation per sample
    pub activation: Vec<f64>,
    /// Light-protein level per sample
    pub light_protein: Vec<f64>,
    /// Observed light output per sample (a.u.)
    pub light_au: Vec<f64>,
}

impl Trajectory {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time_sec.len()
    }

    /// True when the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time_sec.is_empty()
    }

    /// State at sample `i`.
    pub fn state_at(&self, i: usize) -> PixelState {
        PixelState {
            mediator: self.mediator[i],
            activation: self.activation[i],
            light_protein: self.light_protein[i],
        }
    }

    /// Mediator series as `(time, value)` pairs.
    pub fn mediator_series(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time_sec.iter().copied().zip(self.mediator.iter().copied())
    }

    /// Activation series as `(time, value)` pairs.
    pub fn activation_series(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time_sec.iter().copied().zip(self.activation.iter().copied())
    }

    /// Light output series as `(time, value)` pairs.
    pub fn light_series(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time_sec.iter().copied().zip(self.light_au.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_array_round_trip() {
        let state = PixelState {
            mediator: 1.5,
            activation: 0.25,
            light_protein: 3.0,
        };
        assert_eq!(PixelState::from_array(state.to_array()), state);
    }

    #[test]
    fn test_default_state_is_zero() {
        assert_eq!(PixelState::default().to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_series_are_time_aligned() {
        let trajectory = Trajectory {
            time_sec: vec![0.0, 1.0, 2.0],
            mediator: vec![0.0, 0.5, 0.8],
            activation: vec![0.0, 0.1, 0.3],
            light_protein: vec![0.0, 0.2, 0.6],
            light_au: vec![0.0, 0.2, 0.6],
        };

        let pairs: Vec<_> = trajectory.mediator_series().collect();
        assert_eq!(pairs, vec![(0.0, 0.0), (1.0, 0.5), (2.0, 0.8)]);
        assert_eq!(trajectory.activation_series().count(), 3);
        assert_eq!(trajectory.light_series().last(), Some((2.0, 0.6)));

        let mid = trajectory.state_at(1);
        assert_eq!(mid.mediator, 0.5);
        assert_eq!(mid.light_protein, 0.2);
    }
}
