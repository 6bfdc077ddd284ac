//! Command implementations for the rowsample CLI

use crate::error::Result;
use crate::output::SampleReport;
use crate::reader::{self, ReadStrategy};
use crate::resolver;
use crate::sampler;
use crate::writer;
use rand::Rng;
use std::path::Path;

/// Sample `filename` relative to the process working directory, using a
/// fresh OS-seeded generator.
pub fn sample_command(filename: &str) -> Result<SampleReport> {
    let workdir = std::env::current_dir()?;
    let mut rng = rand::thread_rng();
    sample_file(&workdir, filename, &mut rng)
}

/// Resolve the input, read it, draw a sample, and write it out.
///
/// The working directory and random source are parameters so callers
/// (tests in particular) control both.
pub fn sample_file<R: Rng + ?Sized>(
    workdir: &Path,
    filename: &str,
    rng: &mut R,
) -> Result<SampleReport> {
    let input_path = resolver::resolve_input_path(workdir, filename)?;
    let strategy = ReadStrategy::for_filename(filename);
    log::debug!("sampling {} ({:?})", input_path.display(), strategy);

    let records = reader::read_records(&input_path, strategy)?;
    let sample = sampler::draw_records(&records, rng);

    let output_name = writer::output_filename(filename);
    writer::write_sample(&workdir.join(&output_name), &sample)?;

    Ok(SampleReport {
        population: records.len(),
        sample_size: sample.len(),
        output_name,
    })
}
