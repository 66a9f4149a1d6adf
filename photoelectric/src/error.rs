//! Error type for the physics model

use thiserror::Error;

/// Errors raised by the photoelectric model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A wavelength, frequency or work function that is not a positive finite number
    #[error("invalid input: {quantity} must be positive and finite, got {value}")]
    InvalidInput {
        quantity: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Accept `value` only if it is a positive finite number
pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidInput { quantity, value })
    }
}
