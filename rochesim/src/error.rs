//! Error taxonomy for a sampling run.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RocheError {
    /// A parameter parsed as a number but is not finite (`NaN`, `inf`)
    #[error("argument `{name}` must be a finite real number, got {value}")]
    MalformedArgument { name: &'static str, value: f64 },

    /// Negative masses, or a zero total mass (the mass ratio would be 0/0)
    #[error("masses must be non-negative with a positive sum, got M1={m1}, M2={m2}")]
    DegenerateMasses { m1: f64, m2: f64 },

    #[error("grid side length must be non-negative, got L={side}")]
    DegenerateGridSide { side: f64 },

    /// The sweep would never terminate (R <= 0, or R too small to move off -L/2)
    #[error("grid step R={step} cannot advance a sweep over L={side}")]
    DegenerateGridStep { step: f64, side: f64 },

    #[error("failed to write output: {0}")]
    OutputWrite(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RocheError>;
