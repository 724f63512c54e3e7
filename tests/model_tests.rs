//! Tests for the pixel reaction model.
//!
//! Tests validate:
//! - Derivatives at the zero state reduce to the stimulus alone
//! - Each coupling term has the expected sign
//! - The right-hand side is pure and re-entrant

use living_pixel::solver::OdeSystem;
use living_pixel::{ElectrodePulse, PixelModel, RateParameters};

fn default_model() -> PixelModel {
    PixelModel::new(RateParameters::default(), ElectrodePulse::default())
}

// ============================================================================
// Zero-state identities
// ============================================================================

#[test]
fn test_zero_state_derivatives_during_pulse() {
    let model = default_model();
    let rates = RateParameters::default();

    let d = model.derivatives(30.0, &[0.0, 0.0, 0.0]);
    assert_eq!(d[0], rates.k_elec_on, "dM should equal the drive");
    assert_eq!(d[1], 0.0, "dA should vanish with M = A = 0");
    assert_eq!(d[2], 0.0, "dL should vanish with A = L = 0");
}

#[test]
fn test_zero_state_derivatives_outside_pulse() {
    let model = default_model();
    let rates = RateParameters::default();

    let d = model.derivatives(5.0, &[0.0, 0.0, 0.0]);
    assert_eq!(d[0], rates.k_elec_off);
    assert_eq!(d[1], 0.0);
    assert_eq!(d[2], 0.0);
}

// ============================================================================
// Coupling terms
// ============================================================================

#[test]
fn test_mediator_decays_without_drive() {
    let model = default_model();
    let rates = RateParameters::default();

    // Outside the pulse the mediator only decays first-order.
    let d = model.derivatives(100.0, &[2.0, 0.0, 0.0]);
    assert!((d[0] + rates.k_red * 2.0).abs() < 1e-15);
}

#[test]
fn test_activation_production_scales_with_free_regulator() {
    let model = default_model();
    let rates = RateParameters::default();

    let half = model.derivatives(100.0, &[1.0, 0.5, 0.0]);
    let expected = rates.k_on * 1.0 * 0.5 - rates.k_off * 0.5;
    assert!((half[1] - expected).abs() < 1e-15);

    // At full activation only the deactivation term remains.
    let full = model.derivatives(100.0, &[1.0, 1.0, 0.0]);
    assert!((full[1] + rates.k_off).abs() < 1e-15);
}

#[test]
fn test_light_protein_balance() {
    let model = default_model();
    let rates = RateParameters::default();

    let d = model.derivatives(100.0, &[0.0, 0.5, 2.0]);
    let expected = rates.k_prod * 0.5 - rates.k_deg * 2.0;
    assert!((d[2] - expected).abs() < 1e-15);
}

#[test]
fn test_defined_for_unphysical_activation() {
    let model = default_model();

    // A outside [0, 1] is unphysical but must still evaluate.
    let d = model.derivatives(30.0, &[1.0, 1.5, 0.0]);
    assert!(d.iter().all(|v| v.is_finite()));
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_rhs_is_re_entrant() {
    let model = default_model();
    let y = [0.7, 0.3, 1.1];

    let mut first = [0.0; 3];
    model.rhs(25.0, &y, &mut first);
    for _ in 0..50 {
        let mut again = [0.0; 3];
        model.rhs(25.0, &y, &mut again);
        assert_eq!(again, first, "repeated evaluation must be identical");
    }
}

#[test]
fn test_system_dimension() {
    assert_eq!(default_model().ndim(), 3);
}
