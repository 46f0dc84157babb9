//! Numerical and physical parameters for a sampling run
//!
//! `Parameters` holds the five run inputs:
//! - the two masses (`m1`, `m2`),
//! - the grid side length and step (`side`, `step`),
//! - the potential threshold (`cutoff`)
//!
//! Values are only reachable through [`Parameters::new`], which rejects inputs
//! that would make the mass ratio undefined or the sweep non-terminating.

use crate::error::{Result, RocheError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    m1: f64, // mass of the first body
    m2: f64, // mass of the second body
    side: f64, // grid side length L
    step: f64, // grid step R
    cutoff: f64, // minimum potential recorded
}

impl Parameters {
    /// Validate and build a parameter set
    pub fn new(m1: f64, m2: f64, side: f64, step: f64, cutoff: f64) -> Result<Self> {
        for (name, value) in [("M1", m1), ("M2", m2), ("L", side), ("R", step), ("cutoff", cutoff)] {
            if !value.is_finite() {
                return Err(RocheError::MalformedArgument { name, value });
            }
        }

        if m1 < 0.0 || m2 < 0.0 || m1 + m2 <= 0.0 {
            return Err(RocheError::DegenerateMasses { m1, m2 });
        }

        if side < 0.0 {
            return Err(RocheError::DegenerateGridSide { side });
        }

        // Every x in [-L/2, L/2) must advance under `x += step`. The gap between
        // neighbouring floats is at most ulp(L/2) there, so a step of at least
        // that size always moves x; anything smaller can stall after rounding
        if step <= 0.0 || step < ulp(0.5 * side) {
            return Err(RocheError::DegenerateGridStep { step, side });
        }

        Ok(Self { m1, m2, side, step, cutoff })
    }

    pub fn m1(&self) -> f64 {
        self.m1
    }

    pub fn m2(&self) -> f64 {
        self.m2
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Cutoff of `-30 L`, low enough to keep both lobes and the region
    /// between them on the default grid
    pub fn suggested_cutoff(side: f64) -> f64 {
        -side * 30.0
    }
}

/// Gap from a finite, non-negative `v` to the next larger float
fn ulp(v: f64) -> f64 {
    f64::from_bits(v.to_bits() + 1) - v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_run() {
        let p = Parameters::new(1.0, 1.0, 3.5, 0.1, -105.0).unwrap();
        assert_eq!(p.side(), 3.5);
        assert_eq!(p.cutoff(), -105.0);
    }

    #[test]
    fn rejects_zero_total_mass() {
        let err = Parameters::new(0.0, 0.0, 2.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RocheError::DegenerateMasses { .. }));
    }

    #[test]
    fn rejects_negative_mass() {
        let err = Parameters::new(-1.0, 2.0, 2.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RocheError::DegenerateMasses { .. }));
    }

    #[test]
    fn allows_single_massless_body() {
        assert!(Parameters::new(0.0, 1.0, 2.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_step() {
        for step in [0.0, -0.5] {
            let err = Parameters::new(1.0, 1.0, 2.0, step, 0.0).unwrap_err();
            assert!(matches!(err, RocheError::DegenerateGridStep { .. }));
        }
    }

    #[test]
    fn rejects_step_below_float_resolution() {
        let err = Parameters::new(1.0, 1.0, 1.0e6, 1.0e-20, 0.0).unwrap_err();
        assert!(matches!(err, RocheError::DegenerateGridStep { .. }));
    }

    #[test]
    fn rejects_half_ulp_step_that_stalls_mid_sweep() {
        // one step moves -L/2 (odd mantissa) but then stalls on an even one
        let side = 2.0 * (1.5 + 2f64.powi(-52));
        let step = 2f64.powi(-53);
        let err = Parameters::new(1.0, 1.0, side, step, 0.0).unwrap_err();
        assert!(matches!(err, RocheError::DegenerateGridStep { .. }));
    }

    #[test]
    fn accepts_one_ulp_step_and_it_always_advances() {
        let side = 2.0 * (1.5 + 2f64.powi(-52));
        let step = 2f64.powi(-52);
        let p = Parameters::new(1.0, 1.0, side, step, 0.0).unwrap();

        let xs: Vec<f64> = crate::simulation::grid::Axis::new(0.5 * p.side(), p.step()).take(8).collect();
        assert!(xs.windows(2).all(|w| w[1] > w[0]), "stalled: {xs:?}");
    }

    #[test]
    fn ulp_of_one_is_machine_epsilon() {
        assert_eq!(ulp(1.0), f64::EPSILON);
        assert_eq!(ulp(0.0), f64::from_bits(1));
    }

    #[test]
    fn rejects_negative_side() {
        let err = Parameters::new(1.0, 1.0, -2.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RocheError::DegenerateGridSide { .. }));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Parameters::new(1.0, f64::NAN, 2.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RocheError::MalformedArgument { name: "M2", .. }));

        let err = Parameters::new(1.0, 1.0, 2.0, 1.0, f64::NEG_INFINITY).unwrap_err();
        assert!(matches!(err, RocheError::MalformedArgument { name: "cutoff", .. }));
    }

    #[test]
    fn suggested_cutoff_scales_with_side() {
        assert_eq!(Parameters::suggested_cutoff(3.5), -105.0);
    }
}
