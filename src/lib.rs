//! Living Pixel - simulation engine for one pixel of a bio-electronic
//! light-emitting matrix.
//!
//! An electrode drives a diffusible redox mediator, the mediator activates a
//! redox-sensing transcriptional regulator, and the active regulator drives
//! production of a light-emitting protein. The model is a lumped three-state
//! ODE system integrated with an adaptive Dormand-Prince solver and resampled
//! onto a fixed output grid.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod simulation;
pub mod solver;
pub mod state;

pub use config::{PixelConfig, RateParameters, RunSettings};
pub use error::SimulationError;
pub use model::{light_emission, ElectrodePulse, PixelModel};
pub use simulation::PixelSimulation;
pub use solver::{Dopri45, OdeSystem, SolverError, SolverOptions};
pub use state::{PixelState, Trajectory};
