//! Parameter structures for the living-pixel model.
//!
//! All rate constants are provisional estimates pending literature
//! validation, so they stay configurable inputs rather than hard-coded
//! constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::state::PixelState;

/// Rate and scaling constants for one pixel.
///
/// Units are per-second equivalents on the mediator's arbitrary
/// concentration scale. Fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateParameters {
    /// Mediator oxidation rate while the electrode is driven
    pub k_elec_on: f64,

    /// Mediator oxidation rate while the electrode is idle
    pub k_elec_off: f64,

    /// Mediator reduction (first-order decay) rate
    pub k_red: f64,

    /// Regulator activation rate per unit mediator
    pub k_on: f64,

    /// Regulator deactivation rate
    pub k_off: f64,

    /// Light-protein production rate at full activation
    pub k_prod: f64,

    /// Light-protein degradation/dilution rate
    pub k_deg: f64,

    /// Light emission scaling factor (protein level to observed light)
    pub k_ph: f64,
}

impl Default for RateParameters {
    fn default() -> Self {
        Self {
            k_elec_on: 1.0,
            k_elec_off: 0.0,
            k_red: 0.2,
            k_on: 0.3,
            k_off: 0.05,
            k_prod: 0.8,
            k_deg: 0.1,
            k_ph: 1.0,
        }
    }
}

impl RateParameters {
    /// Check that every constant is finite.
    ///
    /// Negative values have no physical meaning in this model but are not
    /// rejected; only non-finite values are structural errors.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let named = [
            ("k_elec_on", self.k_elec_on),
            ("k_elec_off", self.k_elec_off),
            ("k_red", self.k_red),
            ("k_on", self.k_on),
            ("k_off", self.k_off),
            ("k_prod", self.k_prod),
            ("k_deg", self.k_deg),
            ("k_ph", self.k_ph),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(SimulationError::InvalidConfig(format!(
                    "rate constant {} is not finite: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Time span, initial condition, and output grid for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Start of the simulated interval (s)
    pub t0_sec: f64,

    /// End of the simulated interval (s)
    pub tf_sec: f64,

    /// Number of evenly spaced output samples over the interval
    pub sample_count: usize,

    /// Initial state at `t0_sec`
    pub y0: PixelState,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            t0_sec: 0.0,
            tf_sec: 150.0,
            sample_count: 1000,
            y0: PixelState::default(),
        }
    }
}

impl RunSettings {
    /// Check span, grid size, and initial condition.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.t0_sec.is_finite() || !self.tf_sec.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "time span [{}, {}] is not finite",
                self.t0_sec, self.tf_sec
            )));
        }
        if self.tf_sec <= self.t0_sec {
            return Err(SimulationError::InvalidConfig(format!(
                "time span is empty: tf ({}) must be greater than t0 ({})",
                self.tf_sec, self.t0_sec
            )));
        }
        if self.sample_count < 2 {
            return Err(SimulationError::InvalidConfig(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        let y0 = self.y0.to_array();
        if y0.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::InvalidConfig(format!(
                "initial condition is not finite: {:?}",
                y0
            )));
        }
        Ok(())
    }
}

/// Top-level configuration for one pixel simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelConfig {
    /// Rate and scaling constants
    pub rates: RateParameters,
    /// Time span, initial condition, output grid
    pub run: RunSettings,
}

impl PixelConfig {
    /// Load from a JSON file or return defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded pixel configuration from {:?}", path.as_ref());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse pixel configuration: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Pixel configuration file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Reject structurally invalid configurations before integration.
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.rates.validate()?;
        self.run.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = RateParameters::default();
        assert!((rates.k_elec_on - 1.0).abs() < 1e-12);
        assert!((rates.k_red - 0.2).abs() < 1e-12);
        assert!((rates.k_prod - 0.8).abs() < 1e-12);
        assert!((rates.k_ph - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_run_settings() {
        let run = RunSettings::default();
        assert_eq!(run.sample_count, 1000);
        assert!((run.tf_sec - 150.0).abs() < 1e-12);
        assert_eq!(run.y0.to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = PixelConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: PixelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(PixelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_span() {
        let mut config = PixelConfig::default();
        config.run.tf_sec = config.run.t0_sec;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_grid() {
        let mut config = PixelConfig::default();
        config.run.sample_count = 1;
        assert!(config.validate().is_err());
        config.run.sample_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_rate() {
        let mut config = PixelConfig::default();
        config.rates.k_red = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = PixelConfig::load_or_default(dir.path().join("missing.json"));
        assert_eq!(config, PixelConfig::default());
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.json");

        let mut config = PixelConfig::default();
        config.rates.k_red = 0.5;
        config.run.sample_count = 250;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = PixelConfig::load_or_default(&path);
        assert_eq!(loaded, config);
    }
}
