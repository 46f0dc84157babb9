//! Sweep the grid, evaluate the Roche potential and keep points above the cutoff
//!
//! Points are visited in [`GridSweep`] order and qualifying records are
//! produced in that same order. Nothing is buffered besides the writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Result;
use crate::output::{OutputRecord, RecordWriter};
use crate::simulation::grid::GridSweep;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Counters reported at the end of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SweepSummary {
    pub evaluated: usize, // grid points visited
    pub emitted: usize, // records at or above the cutoff
    pub singular: usize, // points where the potential is not finite
    pub min_potential: Option<f64>, // lowest emitted potential
    pub max_potential: Option<f64>, // highest emitted potential
}

impl SweepSummary {
    fn record(&mut self, potential: f64) {
        self.emitted += 1;
        self.min_potential = Some(self.min_potential.map_or(potential, |m| m.min(potential)));
        self.max_potential = Some(self.max_potential.map_or(potential, |m| m.max(potential)));
    }
}

/// Outcome of evaluating one grid point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Finite potential at or above the cutoff
    Kept(OutputRecord),
    /// Finite potential below the cutoff
    BelowCutoff,
    /// Point on top of a body, potential is not finite
    Singular(NVec2),
}

pub struct PotentialGridSampler {
    scenario: Scenario,
}

impl PotentialGridSampler {
    pub fn new(parameters: Parameters) -> Self {
        Self {
            scenario: Scenario::build_scenario(parameters),
        }
    }

    /// Roche potential at `p`
    pub fn potential_at(&self, p: &NVec2) -> f64 {
        self.scenario.potential.evaluate(p)
    }

    /// Classify a single point against the cutoff
    pub fn sample(&self, p: NVec2) -> Sample {
        let potential = self.potential_at(&p);
        if !potential.is_finite() {
            Sample::Singular(p)
        } else if potential >= self.scenario.parameters.cutoff() {
            Sample::Kept(OutputRecord {
                x: p.x,
                y: p.y,
                potential,
            })
        } else {
            Sample::BelowCutoff
        }
    }

    /// Every grid point, in sweep order
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        GridSweep::from_parameters(&self.scenario.parameters).map(move |p| self.sample(p))
    }

    /// Qualifying records only, in sweep order
    pub fn records(&self) -> impl Iterator<Item = OutputRecord> + '_ {
        self.samples().filter_map(|s| match s {
            Sample::Kept(record) => Some(record),
            _ => None,
        })
    }

    /// Run the full sweep into `out` and flush it
    pub fn write_records<W: Write>(&self, out: W) -> Result<SweepSummary> {
        let mut writer = RecordWriter::new(out);
        let p = &self.scenario.parameters;
        let half = p.side() * 0.5;
        debug!(
            "sweeping [{:.6}, {:.6}) with step {} ({} values per axis), cutoff {}",
            -half,
            half,
            p.step(),
            GridSweep::from_parameters(p).axis_values().len(),
            p.cutoff(),
        );

        let mut summary = SweepSummary::default();
        for sample in self.samples() {
            summary.evaluated += 1;
            match sample {
                Sample::Kept(record) => {
                    writer.write_record(&record)?;
                    summary.record(record.potential);
                }
                Sample::BelowCutoff => {}
                Sample::Singular(point) => {
                    warn!("skipping singular point ({:.6}, {:.6})", point.x, point.y);
                    summary.singular += 1;
                }
            }
        }
        writer.finish()?;

        info!(
            "evaluated {} points, emitted {}, skipped {} singular",
            summary.evaluated, summary.emitted, summary.singular
        );
        if let (Some(lo), Some(hi)) = (summary.min_potential, summary.max_potential) {
            info!("emitted potential range [{lo:.6}, {hi:.6}]");
        }

        Ok(summary)
    }

    /// Run the full sweep into a newly created (or truncated) file at `path`
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<SweepSummary> {
        let path = path.as_ref();
        info!("writing records to {}", path.display());
        self.write_records(File::create(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler(m1: f64, m2: f64, side: f64, step: f64, cutoff: f64) -> PotentialGridSampler {
        PotentialGridSampler::new(Parameters::new(m1, m2, side, step, cutoff).unwrap())
    }

    #[test]
    fn point_on_a_body_is_singular() {
        // M1 = 0 puts the heavy body exactly on the origin
        let s = sampler(0.0, 1.0, 2.0, 1.0, -1.0e9);
        assert!(matches!(s.sample(NVec2::zeros()), Sample::Singular(_)));
    }

    #[test]
    fn singular_points_are_counted_not_written() {
        let s = sampler(0.0, 1.0, 2.0, 1.0, -1.0e9);
        let summary = s.write_records(Vec::new()).unwrap();
        assert_eq!(summary.evaluated, 4);
        assert_eq!(summary.singular, 1);
        assert_eq!(summary.emitted, 3);
    }

    #[test]
    fn summary_tracks_potential_range() {
        let s = sampler(1.0, 1.0, 4.0, 2.0, -1.0e9);
        let summary = s.write_records(Vec::new()).unwrap();
        let lo = summary.min_potential.unwrap();
        let hi = summary.max_potential.unwrap();
        assert!((lo - -172.321648).abs() < 1e-5, "got {lo}");
        assert!((hi - -78.956835).abs() < 1e-5, "got {hi}");
    }
}
