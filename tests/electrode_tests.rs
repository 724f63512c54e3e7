//! Tests for the electrode stimulus schedule.
//!
//! Tests validate:
//! - The pulse window is closed on both ends
//! - Times just outside the window return the idle drive
//! - The schedule is total over the real line

use living_pixel::{ElectrodePulse, RateParameters};

#[test]
fn test_drive_on_inside_window() {
    let pulse = ElectrodePulse::default();
    let rates = RateParameters::default();

    for t in [20.0, 25.0, 30.0, 39.5, 40.0] {
        assert_eq!(
            pulse.drive(t, &rates),
            rates.k_elec_on,
            "drive at t = {} should be ON",
            t
        );
    }
}

#[test]
fn test_drive_off_outside_window() {
    let pulse = ElectrodePulse::default();
    let rates = RateParameters::default();

    for t in [0.0, 10.0, 19.999, 40.001, 100.0, 150.0] {
        assert_eq!(
            pulse.drive(t, &rates),
            rates.k_elec_off,
            "drive at t = {} should be OFF",
            t
        );
    }
}

#[test]
fn test_boundary_instants_are_on() {
    let pulse = ElectrodePulse::default();
    let rates = RateParameters::default();

    // The closed-interval tie-break must hold exactly for reproducible
    // trajectories.
    assert_eq!(pulse.drive(20.0, &rates), rates.k_elec_on);
    assert_eq!(pulse.drive(40.0, &rates), rates.k_elec_on);
    assert_eq!(pulse.drive(19.999999999, &rates), rates.k_elec_off);
    assert_eq!(pulse.drive(40.000000001, &rates), rates.k_elec_off);
}

#[test]
fn test_drive_defined_outside_simulated_span() {
    let pulse = ElectrodePulse::default();
    let rates = RateParameters::default();

    assert_eq!(pulse.drive(-5.0, &rates), rates.k_elec_off);
    assert_eq!(pulse.drive(1e9, &rates), rates.k_elec_off);
}

#[test]
fn test_drive_uses_configured_levels() {
    let pulse = ElectrodePulse::default();
    let rates = RateParameters {
        k_elec_on: 2.5,
        k_elec_off: 0.1,
        ..Default::default()
    };

    assert_eq!(pulse.drive(30.0, &rates), 2.5);
    assert_eq!(pulse.drive(50.0, &rates), 0.1);
}
