//! Placement of the two bodies of the binary
//!
//! Both bodies lie on a fixed diagonal through the barycentre (the origin),
//! scaled to unit separation. The heavier body (mass fraction `mu_b`) sits at
//! distance `mu_a` on the negative side as `r_a`; the lighter one (mass
//! fraction `mu_a`) sits at distance `mu_b` on the positive side as `r_b`.

use std::f64::consts::FRAC_PI_4;

use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Angle of the line through both bodies, measured from the x axis
pub const PLACEMENT_ANGLE: f64 = FRAC_PI_4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    pub q: f64, // mass ratio, smaller mass over total
    pub mu_a: f64, // fractional position of body a
    pub mu_b: f64, // fractional position of body b, 1 - mu_a
    pub r_a: NVec2, // position of body a
    pub r_b: NVec2, // position of body b
    pub r_ab: NVec2, // separation r_a - r_b
}

/// Smaller of the two masses over the total. Ties take the `m1` branch.
pub fn mass_ratio(m1: f64, m2: f64) -> f64 {
    if m1 <= m2 {
        m1 / (m1 + m2)
    } else {
        m2 / (m1 + m2)
    }
}

impl DerivedGeometry {
    pub fn from_masses(m1: f64, m2: f64) -> Self {
        let q = mass_ratio(m1, m2);
        let mu_a = q;
        let mu_b = 1.0 - mu_a;

        let (sin, cos) = PLACEMENT_ANGLE.sin_cos();
        let r_a = NVec2::new(-mu_a * cos, -mu_a * sin);
        let r_b = NVec2::new(mu_b * cos, mu_b * sin);

        Self {
            q,
            mu_a,
            mu_b,
            r_a,
            r_b,
            r_ab: r_a - r_b,
        }
    }

    pub fn from_parameters(p: &Parameters) -> Self {
        Self::from_masses(p.m1(), p.m2())
    }
}
