use rochesim::{PotentialGridSampler, RunConfig, OUTPUT_FILE};

use clap::Parser;
use anyhow::{Context, Result};

fn main() -> Result<()> {
    rochesim::logging::init();

    let config = RunConfig::parse();
    let parameters = config.into_parameters().context("invalid run parameters")?;

    // validated before the output file is touched
    let sampler = PotentialGridSampler::new(parameters);
    sampler
        .write_to_path(OUTPUT_FILE)
        .with_context(|| format!("failed to write {OUTPUT_FILE}"))?;

    Ok(())
}
