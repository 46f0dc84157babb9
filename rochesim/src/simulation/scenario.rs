//! Build a fully-initialized sampling scenario from validated parameters
//!
//! A `Scenario` bundles:
//! - the run parameters (`Parameters`)
//! - the placement of both bodies (`DerivedGeometry`)
//! - the active potential terms (`PotentialSet`)
//!
//! Everything here is derived once and never changes during the sweep.

use log::info;

use crate::simulation::geometry::DerivedGeometry;
use crate::simulation::params::Parameters;
use crate::simulation::potential::PotentialSet;

pub struct Scenario {
    pub parameters: Parameters,
    pub geometry: DerivedGeometry,
    pub potential: PotentialSet,
}

impl Scenario {
    pub fn build_scenario(parameters: Parameters) -> Self {
        let geometry = DerivedGeometry::from_parameters(&parameters);

        // Potential: two point-mass wells plus the centrifugal term
        let potential = PotentialSet::roche(&geometry);

        info!(
            "binary M1={} M2={}: q={:.6}, r_a=({:.6}, {:.6}), r_b=({:.6}, {:.6}), |r_ab|={:.6}",
            parameters.m1(),
            parameters.m2(),
            geometry.q,
            geometry.r_a.x,
            geometry.r_a.y,
            geometry.r_b.x,
            geometry.r_b.y,
            geometry.r_ab.norm(),
        );

        Self {
            parameters,
            geometry,
            potential,
        }
    }
}
