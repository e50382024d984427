use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("invalid {field} for {shape}: {value} (must be finite and greater than zero)")]
    InvalidDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl ShapeError {
    /// Check one geometric parameter.
    /// Role: shared guard for every checked constructor
    pub fn check_dimension(
        shape: &'static str,
        field: &'static str,
        value: f64,
    ) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidDimension { shape, field, value })
        }
    }
}
