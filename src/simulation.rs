//! Run orchestration: validate, integrate, derive light output.

use crate::config::PixelConfig;
use crate::error::SimulationError;
use crate::model::{light_emission, ElectrodePulse, PixelModel};
use crate::solver::{Dopri45, SolverOptions};
use crate::state::Trajectory;

/// One living-pixel simulation run.
///
/// The configuration is validated on construction and immutable afterwards;
/// the working state vector is owned by the solver and discarded once the
/// trajectory is materialized. Runs are synchronous and deterministic, so
/// re-running yields an identical trajectory.
pub struct PixelSimulation {
    config: PixelConfig,
    model: PixelModel,
    solver: Dopri45,
}

impl PixelSimulation {
    /// Validate `config` and build a simulation with default solver options.
    pub fn new(config: PixelConfig) -> Result<Self, SimulationError> {
        Self::with_solver_options(config, SolverOptions::default())
    }

    /// Validate `config` and build a simulation with explicit solver options.
    pub fn with_solver_options(
        config: PixelConfig,
        options: SolverOptions,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let model = PixelModel::new(config.rates, ElectrodePulse::default());
        Ok(Self {
            config,
            model,
            solver: Dopri45::new(options),
        })
    }

    /// Configuration this simulation was built with.
    pub fn config(&self) -> &PixelConfig {
        &self.config
    }

    /// Integrate the pixel model over the configured span and return the
    /// sampled trajectory with the derived light series attached.
    ///
    /// Fails loudly on solver breakdown; no partial trajectory is returned.
    pub fn run(&mut self) -> Result<Trajectory, SimulationError> {
        let run = &self.config.run;
        let time_sec = linspace(run.t0_sec, run.tf_sec, run.sample_count);
        let y0 = run.y0.to_array();

        let states = self
            .solver
            .integrate(&self.model, &y0, run.t0_sec, run.tf_sec, &time_sec)?;

        let mut mediator = Vec::with_capacity(states.len());
        let mut activation = Vec::with_capacity(states.len());
        let mut light_protein = Vec::with_capacity(states.len());
        for state in &states {
            mediator.push(state[0]);
            activation.push(state[1]);
            light_protein.push(state[2]);
        }
        let light_au = light_emission(&light_protein, &self.config.rates);

        log::info!(
            "Simulated {} samples over [{}, {}] s ({} accepted / {} rejected steps)",
            time_sec.len(),
            run.t0_sec,
            run.tf_sec,
            self.solver.accepted_steps,
            self.solver.rejected_steps
        );

        Ok(Trajectory {
            time_sec,
            mediator,
            activation,
            light_protein,
            light_au,
        })
    }
}

/// `n` evenly spaced points over `[a, b]`, endpoints exact.
///
/// Requires `n >= 2` and `b > a`, guaranteed by config validation.
fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    let step = (b - a) / (n - 1) as f64;
    let mut ts: Vec<f64> = (0..n).map(|i| a + i as f64 * step).collect();
    ts[n - 1] = b;
    ts
}
