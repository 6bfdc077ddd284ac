//! User-facing run summary

/// Outcome of a sampling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    /// Total records found in the input.
    pub population: usize,
    /// Records actually drawn.
    pub sample_size: usize,
    /// Name of the file the sample was written to.
    pub output_name: String,
}

/// The one line reported after a successful run.
pub fn summary_line(report: &SampleReport) -> String {
    format!(
        "{} samples out of a population of {} written to {}",
        report.sample_size, report.population, report.output_name
    )
}

/// Print the run summary to stdout.
pub fn print_summary(report: &SampleReport) {
    println!("{}", summary_line(report));
}
