use std::time::Instant;

use crate::pipeline::batch_executor::{JobOutcome, JobReport};

/// Observer for batch progress.
///
/// Called only from the coordinating thread, so implementations need no
/// locking.
pub trait BatchLogger: Send {
    /// The run is about to start.
    fn started(&mut self, total_jobs: usize, workers: usize);

    /// One job finished; `completed` counts jobs done so far, in completion order.
    fn job_finished(&mut self, report: &JobReport, completed: usize, total: usize);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events. Used by tests.
pub struct NullBatchLogger;

impl BatchLogger for NullBatchLogger {
    fn started(&mut self, _total_jobs: usize, _workers: usize) {}
    fn job_finished(&mut self, _report: &JobReport, _completed: usize, _total: usize) {}
}

/// Reports through the `log` facade and keeps the counts for a final summary.
///
/// Failures are always logged with their path; per-job progress lines are
/// throttled to every `throttle_jobs` jobs.
pub struct LogBatchLogger {
    throttle_jobs: usize,
    durations_ms: Vec<f64>,
    written: usize,
    skipped: usize,
    failed: usize,
    workers: usize,
    start_time: Instant,
}

impl LogBatchLogger {
    pub fn new(throttle_jobs: usize) -> Self {
        Self {
            throttle_jobs: throttle_jobs.max(1),
            durations_ms: Vec::new(),
            written: 0,
            skipped: 0,
            failed: 0,
            workers: 0,
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary, or `None` if no job finished.
    pub fn summary_string(&self) -> Option<String> {
        if self.durations_ms.is_empty() {
            return None;
        }

        let elapsed_s = self.start_time.elapsed().as_secs_f64();
        let jobs = self.durations_ms.len();
        let avg_ms = self.durations_ms.iter().sum::<f64>() / jobs as f64;
        let max_ms = self.durations_ms.iter().copied().fold(0.0, f64::max);

        let mut lines = vec![format!(
            "Batch summary ({jobs} files, {} workers, {elapsed_s:.1}s total):",
            self.workers
        )];
        lines.push(format!(
            "  written {}  skipped {}  failed {}",
            self.written, self.skipped, self.failed
        ));
        lines.push(format!("  per file: avg {avg_ms:.1}ms  max {max_ms:.1}ms"));
        Some(lines.join("\n"))
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (self.written, self.skipped, self.failed)
    }
}

impl Default for LogBatchLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl BatchLogger for LogBatchLogger {
    fn started(&mut self, total_jobs: usize, workers: usize) {
        self.workers = workers;
        self.start_time = Instant::now();
        log::info!("Framing {total_jobs} file(s) on {workers} worker(s)");
    }

    fn job_finished(&mut self, report: &JobReport, completed: usize, total: usize) {
        self.durations_ms.push(report.duration_ms);
        let path = report.input.display();
        match &report.result {
            Ok(JobOutcome::Written(output)) => {
                self.written += 1;
                log::debug!("{path} -> {} ({:.1}ms)", output.display(), report.duration_ms);
            }
            Ok(JobOutcome::Skipped) => {
                self.skipped += 1;
                log::warn!("Skipped {path}: already framed");
            }
            Err(e) => {
                self.failed += 1;
                log::error!("{path}: {e}");
            }
        }

        if total > 0 && (completed % self.throttle_jobs == 0 || completed == total) {
            let pct = completed as f64 / total as f64 * 100.0;
            log::info!("Processed {completed}/{total} files ({pct:.1}%)");
        }
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
