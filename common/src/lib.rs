//! Common utilities for the lab binaries
//!
//! This crate provides the shared window/GPU setup and the egui overlay used
//! to draw simulator panels.

pub mod graphics;
pub mod overlay;

pub use graphics::*;
pub use overlay::*;
