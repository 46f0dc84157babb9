//! Text output of the sampler
//!
//! One record per line, `x y potential`, each field in fixed notation with six
//! fractional digits. No header, newline-terminated.

use std::fmt;
use std::io::{BufWriter, Write};

use crate::error::Result;

/// File written by the command-line tool, relative to the working directory
pub const OUTPUT_FILE: &str = "roche_data.dat";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputRecord {
    pub x: f64,
    pub y: f64,
    pub potential: f64,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.x, self.y, self.potential)
    }
}

/// Buffered line writer for [`OutputRecord`]s
///
/// Call [`RecordWriter::finish`] once done: dropping the writer also flushes,
/// but silently discards any error.
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
        }
    }

    pub fn write_record(&mut self, record: &OutputRecord) -> Result<()> {
        writeln!(self.inner, "{record}")?;
        Ok(())
    }

    /// Flush buffered records and hand back the underlying writer
    pub fn finish(self) -> Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}
