//! Potential contributors for the corotating frame
//!
//! The Roche potential is the sum of two point-mass wells and the
//! centrifugal term of the rotating frame. Each contributor implements
//! [`PotentialTerm`] and a [`PotentialSet`] adds them up at a field point.

use std::f64::consts::PI;

use crate::simulation::geometry::DerivedGeometry;
use crate::simulation::states::{cubed_norm, NVec2};

/// Gravitational constant in units of AU, years and solar masses (4 pi^2)
pub const GAMMA: f64 = 4.0 * (PI * PI);

/// Trait for scalar potential sources evaluated at a field point
pub trait PotentialTerm {
    fn potential(&self, p: &NVec2) -> f64;
}

/// Collection of potential terms
/// Their contributions are summed in insertion order
pub struct PotentialSet {
    terms: Vec<Box<dyn PotentialTerm + Send + Sync>>,
}

impl PotentialSet {
    /// Create an empty potential set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a potential term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PotentialTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Roche potential of the binary described by `geometry`:
    /// -( G mu_b / |p - r_a| + G mu_a / |p - r_b| + 0.5 (G / |r_ab|^3) |p|^2 )
    pub fn roche(geometry: &DerivedGeometry) -> Self {
        Self::new()
            .with(PointMassTerm {
                gm: GAMMA * geometry.mu_b,
                centre: geometry.r_a,
            })
            .with(PointMassTerm {
                gm: GAMMA * geometry.mu_a,
                centre: geometry.r_b,
            })
            .with(CentrifugalTerm {
                omega2: GAMMA / cubed_norm(&geometry.r_ab),
            })
    }

    /// Total potential at `p`
    pub fn evaluate(&self, p: &NVec2) -> f64 {
        // Every term is a negated magnitude, so summing them in order gives
        // -(a + b + c) exactly
        let mut total = 0.0;
        for term in &self.terms {
            total += term.potential(p);
        }
        total
    }
}

impl Default for PotentialSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Newtonian well of a point mass, -gm / |p - centre|
/// Not softened: at the centre itself this is -inf
pub struct PointMassTerm {
    pub gm: f64, // G times the mass fraction
    pub centre: NVec2, // position of the mass
}

impl PotentialTerm for PointMassTerm {
    fn potential(&self, p: &NVec2) -> f64 {
        let d = (self.centre - p).norm();
        -(self.gm / d)
    }
}

/// Centrifugal term of a frame rotating at omega about the origin,
/// -0.5 omega^2 |p|^2
pub struct CentrifugalTerm {
    pub omega2: f64, // omega^2 = G / |r_ab|^3 (Kepler's third law)
}

impl PotentialTerm for CentrifugalTerm {
    fn potential(&self, p: &NVec2) -> f64 {
        let r = p.norm();
        -(0.5 * (self.omega2 * (r * r)))
    }
}
