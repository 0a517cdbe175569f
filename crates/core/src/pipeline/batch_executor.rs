use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pipeline::batch_logger::BatchLogger;
use crate::shared::error::FrameError;

/// What a successful job did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobOutcome {
    Written(PathBuf),
    /// Input was already a framed output.
    Skipped,
}

#[derive(Error, Debug)]
pub enum JobFailure {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("job panicked: {0}")]
    Panicked(String),
}

/// Result of one input file.
#[derive(Debug)]
pub struct JobReport {
    pub input: PathBuf,
    pub result: Result<JobOutcome, JobFailure>,
    pub duration_ms: f64,
}

/// Totals for a whole run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, JobFailure)>,
}

impl BatchReport {
    pub fn record(&mut self, report: JobReport) {
        match report.result {
            Ok(JobOutcome::Written(output)) => self.written.push(output),
            Ok(JobOutcome::Skipped) => self.skipped.push(report.input),
            Err(failure) => self.failed.push((report.input, failure)),
        }
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One unit of work: frame a single input file.
pub type JobFn<'a> = dyn Fn(&Path) -> Result<JobOutcome, FrameError> + Sync + 'a;

/// Abstracts how a batch of independent jobs is scheduled.
///
/// A failing job never stops the others; every input shows up exactly once
/// in the returned report.
pub trait BatchExecutor: Send {
    fn run(&self, inputs: &[PathBuf], job: &JobFn<'_>, logger: &mut dyn BatchLogger)
        -> BatchReport;
}
