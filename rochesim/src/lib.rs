pub mod simulation;
pub mod configuration;
pub mod output;
pub mod error;
pub mod logging;

pub use simulation::states::{NVec2, cubed_norm};
pub use simulation::params::Parameters;
pub use simulation::geometry::{DerivedGeometry, mass_ratio, PLACEMENT_ANGLE};
pub use simulation::potential::{PotentialTerm, PotentialSet, PointMassTerm, CentrifugalTerm, GAMMA};
pub use simulation::grid::GridSweep;
pub use simulation::scenario::Scenario;
pub use simulation::sampler::{PotentialGridSampler, Sample, SweepSummary};

pub use configuration::config::RunConfig;
pub use output::{OutputRecord, RecordWriter, OUTPUT_FILE};
pub use error::RocheError;
