//! Coupled mediator/regulator/light-protein kinetics.

use crate::config::RateParameters;
use crate::model::ElectrodePulse;
use crate::solver::OdeSystem;

/// The three-state pixel reaction model.
///
/// Binds the rate constants and the electrode schedule by value; there is
/// no shared mutable state between evaluations, so the solver may call the
/// right-hand side any number of times per step.
#[derive(Debug, Clone, Copy)]
pub struct PixelModel {
    rates: RateParameters,
    electrode: ElectrodePulse,
}

impl PixelModel {
    /// Build a model from rate constants and an electrode schedule.
    pub fn new(rates: RateParameters, electrode: ElectrodePulse) -> Self {
        Self { rates, electrode }
    }

    /// Rate constants this model was built with.
    pub fn rates(&self) -> &RateParameters {
        &self.rates
    }

    /// Electrode schedule this model was built with.
    pub fn electrode(&self) -> &ElectrodePulse {
        &self.electrode
    }

    /// Derivative of the state vector `(M, A, L)` at time `t_sec`.
    ///
    /// ```text
    /// dM = drive(t) - k_red * M
    /// dA = k_on * M * (1 - A) - k_off * A
    /// dL = k_prod * A - k_deg * L
    /// ```
    ///
    /// Mediator balances electrode-driven production against first-order
    /// reduction. Activation follows a saturating law on the free regulator
    /// fraction `(1 - A)`, opposed by first-order deactivation. The light
    /// protein is produced in proportion to activation and degrades
    /// first-order. Defined for any real state; `A` outside `[0, 1]` is
    /// unphysical but not an error.
    pub fn derivatives(&self, t_sec: f64, y: &[f64; 3]) -> [f64; 3] {
        let p = &self.rates;
        let (m, a, l) = (y[0], y[1], y[2]);
        let dm = self.electrode.drive(t_sec, p) - p.k_red * m;
        let da = p.k_on * m * (1.0 - a) - p.k_off * a;
        let dl = p.k_prod * a - p.k_deg * l;
        [dm, da, dl]
    }
}

impl OdeSystem for PixelModel {
    fn ndim(&self) -> usize {
        3
    }

    fn rhs(&self, t: f64, y: &[f64], dydt: &mut [f64]) {
        let d = self.derivatives(t, &[y[0], y[1], y[2]]);
        dydt.copy_from_slice(&d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_model() -> PixelModel {
        PixelModel::new(RateParameters::default(), ElectrodePulse::default())
    }

    #[test]
    fn test_zero_state_derivative_is_pure_stimulus() {
        let model = default_model();
        let rates = RateParameters::default();
        let pulse = ElectrodePulse::default();

        for t in [0.0, 19.0, 20.0, 30.0, 40.0, 100.0] {
            let d = model.derivatives(t, &[0.0, 0.0, 0.0]);
            assert_eq!(d[0], pulse.drive(t, &rates), "dM at t = {}", t);
            assert_eq!(d[1], 0.0, "dA at t = {}", t);
            assert_eq!(d[2], 0.0, "dL at t = {}", t);
        }
    }

    #[test]
    fn test_full_activation_only_deactivates() {
        let model = default_model();
        let rates = RateParameters::default();

        // At A = 1 the production term vanishes regardless of M.
        let d = model.derivatives(30.0, &[5.0, 1.0, 0.0]);
        assert!((d[1] + rates.k_off).abs() < 1e-15);
    }

    #[test]
    fn test_repeated_evaluation_is_identical() {
        let model = default_model();
        let y = [1.25, 0.4, 2.0];
        let first = model.derivatives(33.3, &y);
        for _ in 0..10 {
            assert_eq!(model.derivatives(33.3, &y), first);
        }
    }
}
