//! Configuration for a pixel simulation run.
//!
//! A run is fully described by an immutable [`PixelConfig`]: the eight rate
//! and scaling constants plus the time span, initial condition, and output
//! grid size. Configurations can be loaded from JSON or built from defaults.

mod parameters;

pub use parameters::{PixelConfig, RateParameters, RunSettings};
