//! Photoelectric Effect Physics
//!
//! Einstein's photoelectric equation:
//! - Photon energy E = hf
//! - Maximum kinetic energy of an emitted electron K = hf - W, clamped at zero
//! - Emission happens only when hf ≥ W
//!
//! All energies are in electron-volts, frequencies in Hz, wavelengths in nm.

use crate::constants::{C, E_CHARGE, H, NM};
use crate::error::{require_positive, Result};

/// A quantum of light described by either its wavelength or its frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhotonSample {
    Wavelength { nm: f64 },
    Frequency { hz: f64 },
}

impl PhotonSample {
    pub fn frequency_hz(&self) -> Result<f64> {
        match *self {
            PhotonSample::Wavelength { nm } => frequency_from_wavelength(nm),
            PhotonSample::Frequency { hz } => require_positive("frequency", hz),
        }
    }

    pub fn wavelength_nm(&self) -> Result<f64> {
        match *self {
            PhotonSample::Wavelength { nm } => require_positive("wavelength", nm),
            PhotonSample::Frequency { hz } => wavelength_from_frequency(hz),
        }
    }

    pub fn energy_ev(&self) -> Result<f64> {
        photon_energy_ev(self.frequency_hz()?)
    }
}

/// Outcome of shining light of one frequency on one material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionResult {
    pub photon_energy_ev: f64,
    pub kinetic_energy_ev: f64,
    pub can_emit: bool,
}

/// f = c / λ
pub fn frequency_from_wavelength(wavelength_nm: f64) -> Result<f64> {
    let wavelength_nm = require_positive("wavelength", wavelength_nm)?;
    Ok(C / (wavelength_nm * NM))
}

/// λ = c / f, in nanometres
pub fn wavelength_from_frequency(frequency_hz: f64) -> Result<f64> {
    let frequency_hz = require_positive("frequency", frequency_hz)?;
    Ok(C / frequency_hz / NM)
}

/// E = hf, converted from joules to eV
pub fn photon_energy_ev(frequency_hz: f64) -> Result<f64> {
    let frequency_hz = require_positive("frequency", frequency_hz)?;
    Ok(H * frequency_hz / E_CHARGE)
}

/// Lowest frequency that liberates electrons: f₀ = W / h
pub fn threshold_frequency_hz(work_function_ev: f64) -> Result<f64> {
    let work_function_ev = require_positive("work function", work_function_ev)?;
    Ok(work_function_ev * E_CHARGE / H)
}

/// Evaluate the photoelectric equation for one frequency and work function
pub fn emission_result(frequency_hz: f64, work_function_ev: f64) -> Result<EmissionResult> {
    let work_function_ev = require_positive("work function", work_function_ev)?;
    let photon_energy_ev = photon_energy_ev(frequency_hz)?;

    Ok(EmissionResult {
        photon_energy_ev,
        kinetic_energy_ev: (photon_energy_ev - work_function_ev).max(0.0),
        can_emit: photon_energy_ev >= work_function_ev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhysicsError;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_cesium_at_600_thz_emits() {
        let result = emission_result(600e12, 2.3).unwrap();
        let photon = result.photon_energy_ev;
        let kinetic = result.kinetic_energy_ev;
        assert!((photon - 2.4816).abs() < 1e-3, "got {}", photon);
        assert!((kinetic - 0.1816).abs() < 1e-3, "got {}", kinetic);
        assert!(result.can_emit);
    }

    #[test]
    fn test_copper_at_400_thz_does_not_emit() {
        let result = emission_result(400e12, 5.1).unwrap();
        let photon = result.photon_energy_ev;
        assert!((photon - 1.6544).abs() < 1e-3, "got {}", photon);
        assert_eq!(result.kinetic_energy_ev, 0.0);
        assert!(!result.can_emit);
    }

    #[test]
    fn test_red_led_wavelength() {
        let f = frequency_from_wavelength(625.0).unwrap();
        assert!((f - 4.797e14).abs() < 1e11, "got {}", f);
        let e = photon_energy_ev(f).unwrap();
        assert!((e - 1.98).abs() < 5e-3, "got {}", e);
    }

    #[test]
    fn test_wavelength_round_trip() {
        for nm in [0.5, 121.6, 450.0, 530.0, 580.0, 625.0, 1064.0, 1.0e6] {
            let back = wavelength_from_frequency(frequency_from_wavelength(nm).unwrap()).unwrap();
            assert!((back - nm).abs() / nm < 1e-12, "{} nm came back as {}", nm, back);
        }
    }

    #[test]
    fn test_photon_energy_strictly_increasing() {
        let mut previous = photon_energy_ev(1.0e12).unwrap();
        let mut f = 1.0e12;
        while f < 2.0e15 {
            f += 7.5e12;
            let e = photon_energy_ev(f).unwrap();
            assert!(e > previous, "E({}) = {} not above {}", f, e, previous);
            previous = e;
        }
    }

    #[test]
    fn test_below_threshold_has_no_kinetic_energy() {
        for &w in &[2.3, 4.7, 5.1] {
            for thz in (400..=800).step_by(10) {
                let result = emission_result(thz as f64 * 1e12, w).unwrap();
                if result.photon_energy_ev < w {
                    assert!(!result.can_emit);
                    assert_eq!(result.kinetic_energy_ev, 0.0);
                } else {
                    assert!(result.can_emit);
                    assert!((result.kinetic_energy_ev - (result.photon_energy_ev - w)).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn test_exactly_at_threshold_emits_with_zero_kinetic() {
        let f0 = threshold_frequency_hz(4.7).unwrap();
        let result = emission_result(f0 * (1.0 + 1e-12), 4.7).unwrap();
        assert!(result.can_emit);
        assert!(result.kinetic_energy_ev.abs() < 1e-9);

        let below = emission_result(f0 * (1.0 - 1e-9), 4.7).unwrap();
        assert!(!below.can_emit);
    }

    #[test]
    fn test_threshold_frequency_energy_matches_work_function() {
        let f0 = threshold_frequency_hz(2.3).unwrap();
        assert!((photon_energy_ev(f0).unwrap() - 2.3).abs() < EPS);
    }

    #[test]
    fn test_non_positive_inputs_are_rejected() {
        assert!(matches!(
            frequency_from_wavelength(0.0),
            Err(PhysicsError::InvalidInput { quantity: "wavelength", .. })
        ));
        assert!(matches!(
            photon_energy_ev(-600e12),
            Err(PhysicsError::InvalidInput { quantity: "frequency", .. })
        ));
        assert!(matches!(
            emission_result(600e12, 0.0),
            Err(PhysicsError::InvalidInput { quantity: "work function", .. })
        ));
        assert!(wavelength_from_frequency(f64::NAN).is_err());
        assert!(threshold_frequency_hz(-1.0).is_err());
    }

    #[test]
    fn test_photon_sample_variants_agree() {
        let by_wavelength = PhotonSample::Wavelength { nm: 450.0 };
        let by_frequency = PhotonSample::Frequency {
            hz: by_wavelength.frequency_hz().unwrap(),
        };
        assert!((by_frequency.wavelength_nm().unwrap() - 450.0).abs() < 1e-9);
        let energy_gap = by_frequency.energy_ev().unwrap() - by_wavelength.energy_ev().unwrap();
        assert!(energy_gap.abs() < EPS);
        assert!(PhotonSample::Frequency { hz: 0.0 }.energy_ev().is_err());
    }

    #[test]
    fn test_large_inputs_stay_finite() {
        let result = emission_result(1.0e20, 5.1).unwrap();
        assert!(result.photon_energy_ev.is_finite());
        assert!(result.kinetic_energy_ev.is_finite());
    }
}
