//! Photoelectric Effect Simulator
//!
//! This crate provides the computation and presentation core of an interactive
//! photoelectric effect lab:
//!
//! - **Physics**: wavelength/frequency conversion, photon energy `E = hf`,
//!   and the kinetic energy of emitted electrons `K = hf - W`
//! - **Catalogs**: cathode materials with their work functions and the LEDs
//!   used in the comparison experiment
//! - **Presenter**: renderer-agnostic draw command lists for the energy-level
//!   diagram and the LED wavelength chart, plus formatted readouts
//! - **UI**: egui adapters that paint those command lists and host the
//!   simulator controls and equation sidebar

pub mod error;
pub mod physics;
pub mod catalog;
pub mod draw;
pub mod config;
pub mod presenter;
pub mod canvas;
pub mod equations_ui;
pub mod panel;

pub use error::{PhysicsError, Result};

/// Physical constants for the photoelectric model (SI units)
pub mod constants {
    /// Planck constant in J·s
    pub const H: f64 = 6.626e-34;

    /// Elementary charge in C, also the J → eV conversion factor
    pub const E_CHARGE: f64 = 1.602e-19;

    /// Speed of light in m/s
    pub const C: f64 = 2.998e8;

    /// Metres per nanometre
    pub const NM: f64 = 1e-9;

    /// Hertz per terahertz
    pub const THZ: f64 = 1e12;
}
