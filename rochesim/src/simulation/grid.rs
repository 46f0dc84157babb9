//! Square grid sweep over [-L/2, L/2) x [-L/2, L/2)
//!
//! Coordinates are produced by repeated addition of the step, not by
//! `start + i * step`, and each axis stops at the first value that is not
//! strictly below `L/2`. Accumulated rounding can therefore add or drop the
//! last column compared to an exact grid.

use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// One axis of the sweep
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    next: f64,
    end: f64,
    step: f64,
}

impl Axis {
    pub fn new(half: f64, step: f64) -> Self {
        Self {
            next: -half,
            end: half,
            step,
        }
    }
}

impl Iterator for Axis {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next < self.end {
            let v = self.next;
            self.next += self.step;
            Some(v)
        } else {
            None
        }
    }
}

/// Row-major sweep: x in the outer loop, y innermost, both ascending
#[derive(Debug, Clone)]
pub struct GridSweep {
    outer: Axis,
    inner_template: Axis,
    x: Option<f64>,
    inner: Axis,
}

impl GridSweep {
    pub fn new(side: f64, step: f64) -> Self {
        let half = side * 0.5;
        let mut outer = Axis::new(half, step);
        let template = Axis::new(half, step);
        let x = outer.next();
        Self {
            outer,
            inner_template: template,
            x,
            inner: template,
        }
    }

    pub fn from_parameters(p: &Parameters) -> Self {
        Self::new(p.side(), p.step())
    }

    /// Values one axis takes, in sweep order
    pub fn axis_values(&self) -> Vec<f64> {
        self.inner_template.collect()
    }
}

impl Iterator for GridSweep {
    type Item = NVec2;

    fn next(&mut self) -> Option<NVec2> {
        loop {
            let x = self.x?;
            if let Some(y) = self.inner.next() {
                return Some(NVec2::new(x, y));
            }
            // inner axis exhausted: advance x and restart y
            self.x = self.outer.next();
            self.inner = self.inner_template;
        }
    }
}
