//! Fixed catalogs: cathode materials and the LEDs of the comparison experiment

use crate::constants::THZ;
use crate::error::Result;
use crate::physics::{frequency_from_wavelength, photon_energy_ev};

/// Cathode material and its work function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialWorkFunction {
    pub label: &'static str,
    pub work_function_ev: f64,
}

impl MaterialWorkFunction {
    /// Label shown in the material selector, e.g. "Cesium (2.3 eV)"
    pub fn option_label(&self) -> String {
        format!("{} ({} eV)", self.label, self.work_function_ev)
    }
}

pub const CESIUM: MaterialWorkFunction = MaterialWorkFunction {
    label: "Cesium",
    work_function_ev: 2.3,
};

pub const ZINC: MaterialWorkFunction = MaterialWorkFunction {
    label: "Zinc",
    work_function_ev: 4.7,
};

pub const COPPER: MaterialWorkFunction = MaterialWorkFunction {
    label: "Copper",
    work_function_ev: 5.1,
};

pub const MATERIALS: &[MaterialWorkFunction] = &[CESIUM, ZINC, COPPER];

/// Whether an LED's photons are energetic enough to be useful emitters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionCapability {
    High,
    Low,
}

impl EmissionCapability {
    pub fn label(&self) -> &'static str {
        match self {
            EmissionCapability::High => "High",
            EmissionCapability::Low => "Low",
        }
    }
}

/// An LED light source
#[derive(Debug, Clone, PartialEq)]
pub struct LedSpec {
    pub name: String,
    pub wavelength_nm: f64,
    pub color_hex: String,
}

/// Physical quantities derived from an LED's wavelength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedReadout {
    pub frequency_thz: f64,
    pub photon_energy_ev: f64,
    pub capability: EmissionCapability,
}

impl LedSpec {
    pub fn new(name: impl Into<String>, wavelength_nm: f64, color_hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wavelength_nm,
            color_hex: color_hex.into(),
        }
    }

    /// Frequency and photon energy of this LED.
    ///
    /// Capability is rated against cesium, the most easily ionised catalog material.
    pub fn readout(&self) -> Result<LedReadout> {
        let frequency_hz = frequency_from_wavelength(self.wavelength_nm)?;
        let photon_energy_ev = photon_energy_ev(frequency_hz)?;
        let capability = if photon_energy_ev > CESIUM.work_function_ev {
            EmissionCapability::High
        } else {
            EmissionCapability::Low
        };

        Ok(LedReadout {
            frequency_thz: frequency_hz / THZ,
            photon_energy_ev,
            capability,
        })
    }
}

/// The four LEDs used on the bench, ordered from longest to shortest wavelength
pub fn led_catalog() -> Vec<LedSpec> {
    vec![
        LedSpec::new("Red", 625.0, "#DC143C"),
        LedSpec::new("Orange", 580.0, "#FFD700"),
        LedSpec::new("Green", 530.0, "#32CD32"),
        LedSpec::new("Blue", 450.0, "#4169E1"),
    ]
}
