//! Command-line configuration for a sampling run.
//!
//! A run is configured entirely by five positional arguments:
//!
//! ```text
//! rochesim M1 M2 L R cutoff
//! ```
//!
//! - `M1`, `M2`: masses of the two bodies (only their ratio matters)
//! - `L`: side length of the square grid, centred on the barycentre
//! - `R`: grid step along both axes
//! - `cutoff`: minimum potential written to the output
//!
//! Arguments that are missing or do not parse as real numbers are rejected by
//! clap before anything runs. [`RunConfig::into_parameters`] then maps the
//! values into the validated runtime [`Parameters`].

use clap::Parser;

use crate::error::Result;
use crate::simulation::params::Parameters;

/// Sample the Roche potential of a binary on a square grid and write every
/// point whose potential is at or above the cutoff to roche_data.dat
#[derive(Parser, Debug, Clone)]
#[command(version, allow_negative_numbers = true)]
pub struct RunConfig {
    /// Mass of the first body
    #[arg(value_name = "M1")]
    pub m1: f64,

    /// Mass of the second body
    #[arg(value_name = "M2")]
    pub m2: f64,

    /// Grid side length; the grid spans [-L/2, L/2) on both axes
    #[arg(value_name = "L")]
    pub side: f64,

    /// Grid step, must be positive
    #[arg(value_name = "R")]
    pub step: f64,

    /// Minimum potential recorded (-30 * L keeps both lobes)
    #[arg(value_name = "CUTOFF")]
    pub cutoff: f64,
}

impl RunConfig {
    pub fn into_parameters(self) -> Result<Parameters> {
        Parameters::new(self.m1, self.m2, self.side, self.step, self.cutoff)
    }
}
