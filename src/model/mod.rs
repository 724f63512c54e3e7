//! Reaction model for one living pixel.
//!
//! The pixel couples three processes:
//! - electrode-driven oxidation of a diffusible redox mediator
//! - mediator-dependent activation of a redox-sensing regulator
//! - regulator-driven production of a light-emitting protein
//!
//! The electrode schedule is a pure function of time, the reaction model a
//! pure function of time and state. Both are re-evaluated freely by the
//! adaptive solver at intermediate stage points.

mod electrode;
mod reaction;

pub use electrode::ElectrodePulse;
pub use reaction::PixelModel;

use crate::config::RateParameters;

/// Observed light output derived from the light-protein column.
///
/// `light[i] = k_ph * light_protein[i]` for every sample.
pub fn light_emission(light_protein: &[f64], rates: &RateParameters) -> Vec<f64> {
    light_protein.iter().map(|l| rates.k_ph * l).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_emission_scales_protein_level() {
        let rates = RateParameters {
            k_ph: 2.5,
            ..Default::default()
        };
        let light = light_emission(&[0.0, 1.0, 4.0], &rates);
        assert_eq!(light, vec![0.0, 2.5, 10.0]);
    }
}
